//! Data model for documented API resources, format-agnostic.
//!
//! Every record serializes with camelCase keys; that serialized form is the
//! data context handed to page templates.

use serde::Serialize;
use std::fmt;

/// One documented REST resource.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDescriptor {
    /// Display name of the doc page, e.g. "api/addresses"
    pub page: &'static str,
    /// HTML prose, may be empty
    pub description: &'static str,
    /// Base path segment and output file stem
    pub endpoint_path: &'static str,
    pub endpoints: Vec<Endpoint>,
    pub structure: Vec<Field>,
    pub projections: Vec<Projection>,
    pub links: Vec<Relation>,
    /// endpointPath of the resource whose representation this one returns
    pub delegates_to: Option<&'static str>,
}

impl ApiDescriptor {
    pub fn new(endpoint_path: &'static str, page: &'static str) -> Self {
        Self {
            page,
            description: "",
            endpoint_path,
            endpoints: Vec::new(),
            structure: Vec::new(),
            projections: Vec::new(),
            links: Vec::new(),
            delegates_to: None,
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.structure.push(field);
        self
    }

    pub fn projection(mut self, name: &'static str, description: &'static str) -> Self {
        self.projections.push(Projection { name, description });
        self
    }

    pub fn link(mut self, name: &'static str, target: &'static str, security: &'static str) -> Self {
        self.links.push(Relation {
            name,
            target,
            security,
        });
        self
    }

    pub fn delegates_to(mut self, endpoint_path: &'static str) -> Self {
        self.delegates_to = Some(endpoint_path);
        self
    }
}

/// HTTP method of a documented endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One HTTP operation exposed by a resource.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub method: Method,
    /// Relative to the resource base, e.g. "/{id}" or "/search/findByEmail"
    pub path: &'static str,
    pub description: &'static str,
    pub returns: &'static str,
    /// Required role or ownership condition (prose)
    pub security: Option<&'static str>,
    pub pageable: bool,
    /// Query parameters, in display order
    pub parameters: Vec<Parameter>,
    /// HTML prose describing a composite request body
    pub request_body: Option<&'static str>,
}

impl Endpoint {
    fn new(
        method: Method,
        path: &'static str,
        description: &'static str,
        returns: &'static str,
    ) -> Self {
        Self {
            method,
            path,
            description,
            returns,
            security: None,
            pageable: false,
            parameters: Vec::new(),
            request_body: None,
        }
    }

    pub fn get(path: &'static str, description: &'static str, returns: &'static str) -> Self {
        Self::new(Method::Get, path, description, returns)
    }

    pub fn post(path: &'static str, description: &'static str, returns: &'static str) -> Self {
        Self::new(Method::Post, path, description, returns)
    }

    pub fn put(path: &'static str, description: &'static str, returns: &'static str) -> Self {
        Self::new(Method::Put, path, description, returns)
    }

    pub fn delete(path: &'static str, description: &'static str, returns: &'static str) -> Self {
        Self::new(Method::Delete, path, description, returns)
    }

    pub fn secured(mut self, security: &'static str) -> Self {
        self.security = Some(security);
        self
    }

    pub fn pageable(mut self) -> Self {
        self.pageable = true;
        self
    }

    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn request_body(mut self, body: &'static str) -> Self {
        self.request_body = Some(body);
        self
    }
}

/// Query parameter of a search endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
    pub description: &'static str,
}

impl Parameter {
    pub fn required(name: &'static str, kind: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }
}

/// Attribute of a resource representation.
#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub name: &'static str,
    /// Primitive label or HTML reference to another resource
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Constraint prose, not a machine-checked rule
    pub validations: Option<&'static str>,
}

impl Field {
    pub fn new(name: &'static str, kind: &'static str) -> Self {
        Self {
            name,
            kind,
            validations: None,
        }
    }

    pub fn validated(mut self, validations: &'static str) -> Self {
        self.validations = Some(validations);
        self
    }
}

/// Named partial view of a resource.
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    pub name: &'static str,
    pub description: &'static str,
}

/// Documented association to another resource.
#[derive(Debug, Clone, Serialize)]
pub struct Relation {
    pub name: &'static str,
    /// endpointPath of the target resource
    #[serde(rename = "type")]
    pub target: &'static str,
    /// Update/delete permission prose
    pub security: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_serializes_uppercase() {
        let json = serde_json::to_string(&Method::Delete).unwrap();
        assert_eq!(json, "\"DELETE\"");
    }

    #[test]
    fn descriptor_uses_camel_case_keys() {
        let d = ApiDescriptor::new("holidays", "api/holidays").delegates_to("employees");
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["endpointPath"], "holidays");
        assert_eq!(value["delegatesTo"], "employees");
    }

    #[test]
    fn field_and_relation_expose_type_key() {
        let d = ApiDescriptor::new("companies", "api/companies")
            .field(Field::new("id", "Long"))
            .link("address", "addresses", "deletable");
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["structure"][0]["type"], "Long");
        assert_eq!(value["links"][0]["type"], "addresses");
    }

    #[test]
    fn method_displays_as_verb() {
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn endpoint_builder_sets_optional_parts() {
        let e = Endpoint::get("/", "Get all.", "A page.")
            .secured("ROLE_ADMIN")
            .pageable()
            .param(Parameter::required("name", "String", "filter"));
        assert_eq!(e.security, Some("ROLE_ADMIN"));
        assert!(e.pageable);
        assert!(e.parameters[0].required);
        assert!(e.request_body.is_none());
    }
}
