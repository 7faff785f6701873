use serde_json::Value;

/// Metadata about a single route, as exposed by the host application.
///
/// `path` may use either `{param}` or `:param` segments.
#[derive(Debug, Clone)]
pub struct RouteInfo {
    pub path: String,
    pub method: String,
    /// Name of the controller declaring the route.
    pub controller: String,
    /// Name of the handler method inside the controller.
    pub handler: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub request_body_type: Option<String>,
    pub request_body_schema: Option<Value>,
    pub request_body_required: bool,
    pub response_type: Option<String>,
    pub response_schema: Option<Value>,
    pub response_status: u16,
    pub params: Vec<ParamInfo>,
    pub roles: Vec<String>,
    pub deprecated: bool,
    pub has_auth: bool,
}

impl RouteInfo {
    pub fn new(method: &str, path: &str, controller: &str, handler: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            controller: controller.to_string(),
            handler: handler.to_string(),
            summary: None,
            description: None,
            tags: Vec::new(),
            request_body_type: None,
            request_body_schema: None,
            request_body_required: true,
            response_type: None,
            response_schema: None,
            response_status: 200,
            params: Vec::new(),
            roles: Vec::new(),
            deprecated: false,
            has_auth: false,
        }
    }

    pub fn with_summary(mut self, summary: &str) -> Self {
        self.summary = Some(summary.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    pub fn with_param(mut self, param: ParamInfo) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_request_body(mut self, type_name: &str, schema: Option<Value>) -> Self {
        self.request_body_type = Some(type_name.to_string());
        self.request_body_schema = schema;
        self
    }

    pub fn with_response(mut self, type_name: &str, schema: Option<Value>) -> Self {
        self.response_type = Some(type_name.to_string());
        self.response_schema = schema;
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.response_status = status;
        self
    }

    /// Require authentication, optionally restricted to the given roles.
    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.has_auth = true;
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

/// Metadata about a route parameter.
#[derive(Debug, Clone)]
pub struct ParamInfo {
    pub name: String,
    pub location: ParamLocation,
    pub param_type: String,
    pub required: bool,
}

impl ParamInfo {
    /// A required path parameter.
    pub fn path(name: &str, param_type: &str) -> Self {
        Self {
            name: name.to_string(),
            location: ParamLocation::Path,
            param_type: param_type.to_string(),
            required: true,
        }
    }

    pub fn query(name: &str, param_type: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            location: ParamLocation::Query,
            param_type: param_type.to_string(),
            required,
        }
    }

    pub fn header(name: &str, param_type: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            location: ParamLocation::Header,
            param_type: param_type.to_string(),
            required,
        }
    }
}

/// Where a parameter is located in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Header,
}

impl ParamLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamLocation::Path => "path",
            ParamLocation::Query => "query",
            ParamLocation::Header => "header",
        }
    }
}

/// A module of the host application: its own routes plus imported modules.
#[derive(Debug, Clone, Default)]
pub struct ModuleInfo {
    pub name: String,
    pub routes: Vec<RouteInfo>,
    pub imports: Vec<ModuleInfo>,
}

impl ModuleInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_route(mut self, route: RouteInfo) -> Self {
        self.routes.push(route);
        self
    }

    pub fn with_routes(mut self, routes: impl IntoIterator<Item = RouteInfo>) -> Self {
        self.routes.extend(routes);
        self
    }

    pub fn import(mut self, module: ModuleInfo) -> Self {
        self.imports.push(module);
        self
    }
}
