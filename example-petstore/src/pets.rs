use std::sync::{Arc, RwLock};

use apidoc::prelude::*;
use axum::extract::{Path, State};
use axum::routing::get;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Pet {
    pub id: u64,
    pub name: String,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NewPet {
    pub name: String,
    pub tag: Option<String>,
}

#[derive(Clone, Default)]
pub struct PetStore {
    pets: Arc<RwLock<Vec<Pet>>>,
}

impl PetStore {
    pub fn seeded() -> Self {
        let store = Self::default();
        store.add(NewPet {
            name: "Tom".into(),
            tag: Some("cat".into()),
        });
        store
    }

    fn add(&self, new: NewPet) -> Pet {
        let mut pets = self.pets.write().unwrap_or_else(|e| e.into_inner());
        let pet = Pet {
            id: pets.len() as u64 + 1,
            name: new.name,
            tag: new.tag,
        };
        pets.push(pet.clone());
        pet
    }

    fn list(&self) -> Vec<Pet> {
        self.pets.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn find(&self, id: u64) -> Option<Pet> {
        self.list().into_iter().find(|p| p.id == id)
    }
}

async fn list_pets(State(store): State<PetStore>) -> Json<Vec<Pet>> {
    Json(store.list())
}

async fn create_pet(State(store): State<PetStore>, Json(new): Json<NewPet>) -> (StatusCode, Json<Pet>) {
    (StatusCode::CREATED, Json(store.add(new)))
}

async fn find_pet(State(store): State<PetStore>, Path(id): Path<u64>) -> Result<Json<Pet>, StatusCode> {
    store.find(id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// The pet routes, served under the `api` global prefix.
pub fn router(store: PetStore) -> Router {
    Router::new()
        .route("/api/pets", get(list_pets).post(create_pet))
        .route("/api/pets/{id}", get(find_pet))
        .with_state(store)
}

fn schema<T: JsonSchema>() -> Option<serde_json::Value> {
    Some(schemars::schema_for!(T).to_value())
}

/// Route metadata for the documentation scanner.
pub fn module() -> ModuleInfo {
    ModuleInfo::new("PetsModule").with_routes([
        RouteInfo::new("GET", "/pets", "PetsController", "list")
            .with_tag("pets")
            .with_summary("List all pets"),
        RouteInfo::new("POST", "/pets", "PetsController", "create")
            .with_tag("pets")
            .with_summary("Add a pet")
            .with_request_body("NewPet", schema::<NewPet>())
            .with_response("Pet", schema::<Pet>())
            .with_status(201),
        RouteInfo::new("GET", "/pets/:id", "PetsController", "find")
            .with_tag("pets")
            .with_summary("Find a pet by id")
            .with_param(ParamInfo::path("id", "integer"))
            .with_response("Pet", schema::<Pet>()),
    ])
}
