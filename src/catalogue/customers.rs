//! Companies and the people and places attached to them.

use crate::model::{ApiDescriptor, Endpoint, Field, Parameter};

pub fn addresses() -> ApiDescriptor {
    ApiDescriptor::new("addresses", "api/addresses")
        .description("Addresses for companies.")
        .endpoint(Endpoint::get(
            "/{id}",
            "Get a single address by its id.",
            "One address.",
        ))
        .endpoint(
            Endpoint::post(
                "/",
                "Create a new address. Returns the created object.",
                "A single address.",
            )
            .secured("ROLE_ADMIN"),
        )
        .endpoint(
            Endpoint::put(
                "/{id}",
                "Update the address identified by id. Returns the updated object.",
                "A single address.",
            )
            .secured("ROLE_ADMIN"),
        )
        .endpoint(
            Endpoint::delete("/{id}", "Delete a the address identified by id.", "Nothing")
                .secured("ROLE_ADMIN"),
        )
        .field(Field::new("id", "Long"))
        .field(Field::new("version", "Integer"))
        .field(Field::new("street", "String").validated("not empty"))
        .field(Field::new("houseNumber", "String").validated("not empty"))
        .field(Field::new("zipCode", "String").validated("not empty"))
        .field(Field::new("city", "String").validated("not empty"))
        .field(Field::new("country", "String").validated("not empty"))
}

pub fn contact_persons() -> ApiDescriptor {
    ApiDescriptor::new("contactPersons", "api/contactPersons")
        .description("Contact persons belong to a company.")
        .endpoint(Endpoint::get(
            "/",
            "Get all contact persons.",
            "List of contact persons.",
        ))
        .endpoint(Endpoint::get(
            "/{id}",
            "Get a single contact person by its id.",
            "One contact person.",
        ))
        .endpoint(
            Endpoint::post(
                "/",
                "Create a new contact person. Returns the created object.",
                "A single contact person.",
            )
            .secured("ROLE_ADMIN"),
        )
        .endpoint(
            Endpoint::put(
                "/{id}",
                "Update the contact person identified by id. Returns the updated object.",
                "A contact person.",
            )
            .secured("ROLE_ADMIN"),
        )
        .endpoint(
            Endpoint::delete("/{id}", "Delete the contact person identified by id.", "Nothing")
                .secured("ROLE_ADMIN"),
        )
        .field(Field::new("id", "Long"))
        .field(Field::new("version", "Integer"))
        .field(Field::new("salutation", "String").validated("not empty"))
        .field(Field::new("firstName", "String").validated("not empty"))
        .field(Field::new("lastName", "String").validated("not empty"))
        .field(Field::new("email", "String").validated("valid email address"))
        .field(Field::new("phone", "String"))
        .field(Field::new("roles", "String"))
        .link("company", "companies", "deletable, updateable by ROLE_SUPERVISOR")
}

pub fn companies() -> ApiDescriptor {
    ApiDescriptor::new("companies", "api/companies")
        .description("A company is a holder of projects or a debitor for projects.")
        .endpoint(Endpoint::get("/", "Get all companies.", "A page of companies.").pageable())
        .endpoint(Endpoint::get(
            "/{id}",
            "Get a single company time by its id.",
            "One company.",
        ))
        .endpoint(
            Endpoint::get(
                "/search/findByCompanyId",
                "Find companies by their id.",
                "A list of companies.",
            )
            .param(Parameter::required(
                "companyId",
                "String",
                "The company id to query for.",
            )),
        )
        .endpoint(
            Endpoint::get(
                "/search/findByNameLikeIgnoreCaseOrderByNameAsc",
                "Find companies by searching for a name.",
                "A list of companies.",
            )
            .param(Parameter::required(
                "name",
                "String",
                "The name to search for. Wildcards are %.",
            )),
        )
        .endpoint(
            Endpoint::post(
                "/",
                "Create a new company. Returns the created object.<p>Since a company needs an \
                 address, use <a href=\"#POST/createWithAddress\">/createWithAddress</a> instead.</p>",
                "A single company.",
            )
            .secured("ROLE_ADMIN"),
        )
        .endpoint(
            Endpoint::post(
                "/createWithAddress",
                "Create a new company together with an address.",
                "A single company.",
            )
            .secured("ROLE_ADMIN")
            .request_body(
                "The request body must contain an object consisting of a valid \
                 <a href=\"companies.html\">company</a> and <a href=\"addresses.html\">address</a>.\
                 <pre>{\n\t\"company\": { \"companyId\": ...},\n\t\"address\": { \"street\": ...}\n}</pre>",
            ),
        )
        .endpoint(
            Endpoint::put(
                "/{id}",
                "Update the company identified by id. Returns the updated object.",
                "A single company.",
            )
            .secured("ROLE_ADMIN"),
        )
        .endpoint(
            Endpoint::delete("/{id}", "Delete a the company identified by id.", "Nothing.")
                .secured("ROLE_ADMIN"),
        )
        .projection(
            "withAddressAndContactPersons",
            "Contains the address and contact persons.",
        )
        .field(Field::new("id", "Long"))
        .field(Field::new("version", "Integer"))
        .field(Field::new("companyId", "Long").validated("> 0, unique, not null"))
        .field(Field::new("name", "String").validated("not empty"))
        .link("address", "addresses", "deletable, updateable by ROLE_SUPERVISOR")
        .link("contactPersons", "contactPersons", "deletable, updateable by ROLE_SUPERVISOR")
        .link("projects", "projects", "deletable, updateable by ROLE_SUPERVISOR")
}
