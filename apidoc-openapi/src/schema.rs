use serde_json::{json, Map, Value};

/// Registry that collects JSON Schema definitions for `components/schemas`.
///
/// schemars 1.x generates JSON Schema Draft 2020-12 with nested
/// definitions under `$defs` and references of the form `#/$defs/X`.
/// Registration strips `$schema`, promotes `$defs` entries to top-level
/// components and rewrites references to `#/components/schemas/X`.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: Map<String, Value>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under `name`. The first registration of a name wins.
    ///
    /// A missing schema registers a generic object.
    pub fn register(&mut self, name: &str, schema: Option<&Value>) {
        if self.schemas.contains_key(name) {
            return;
        }
        let Some(root) = schema else {
            self.schemas
                .insert(name.to_string(), json!({ "type": "object" }));
            return;
        };

        let mut schema = root.clone();
        let mut definitions = Map::new();
        if let Some(obj) = schema.as_object_mut() {
            obj.remove("$schema");
            if let Some(Value::Object(defs)) = obj.remove("$defs") {
                definitions = defs;
            }
            // The root title duplicates the component name.
            obj.remove("title");
        }
        sanitize_schema(&mut schema);
        self.schemas.insert(name.to_string(), schema);

        for (def_name, mut def_schema) in definitions {
            sanitize_schema(&mut def_schema);
            self.schemas.entry(def_name).or_insert(def_schema);
        }
    }

    /// Register a simple object schema with required fields.
    ///
    /// Each field is `(name, type)` where type is an OpenAPI type like
    /// `"string"`, `"integer"` or `"boolean"`.
    pub fn register_object(&mut self, name: &str, fields: &[(&str, &str)]) {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for (field_name, field_type) in fields {
            properties.insert(field_name.to_string(), json!({ "type": field_type }));
            required.push(json!(field_name));
        }
        let schema = json!({
            "type": "object",
            "properties": properties,
            "required": required,
        });
        self.register(name, Some(&schema));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Consume the registry and return the `components/schemas` map.
    pub fn into_schemas(self) -> Map<String, Value> {
        self.schemas
    }
}

/// Recursively rewrite `$ref` paths from schemars format to OpenAPI components format.
fn sanitize_schema(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            if let Some(Value::String(ref_str)) = obj.get_mut("$ref") {
                if ref_str.starts_with("#/$defs/") {
                    *ref_str = ref_str.replace("#/$defs/", "#/components/schemas/");
                }
            }
            for (_, v) in obj.iter_mut() {
                sanitize_schema(v);
            }
        }
        Value::Array(arr) => {
            for v in arr.iter_mut() {
                sanitize_schema(v);
            }
        }
        _ => {}
    }
}
