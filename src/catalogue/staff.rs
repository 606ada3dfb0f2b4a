//! Employees, their login data and roles.

use crate::model::{ApiDescriptor, Endpoint, Field, Parameter};

pub fn address_book() -> ApiDescriptor {
    ApiDescriptor::new("address_book", "api/address_book")
        .endpoint(
            Endpoint::get(
                "/",
                "Get the address book containing all employees except the admin.",
                "Page of addressbook entries.",
            )
            .pageable()
            .secured("ROLE_EMPLOYEE"),
        )
        .field(Field::new("firstName", "String").validated("not empty"))
        .field(Field::new("lastName", "String").validated("not empty"))
        .field(Field::new("phoneNumber", "String"))
        .field(Field::new("title", "String"))
        .field(Field::new("email", "String").validated("valid email address"))
}

pub fn authorities() -> ApiDescriptor {
    ApiDescriptor::new("authorities", "api/authorities")
        .endpoint(Endpoint::get(
            "/",
            "Get all authorities that are defined",
            "List of authorities",
        ))
        .endpoint(Endpoint::get(
            "/{id}",
            "Get one authority by its id.",
            "One authority.",
        ))
        .field(Field::new("id", "Long"))
        .field(Field::new("authority", "String").validated("not empty"))
        .field(Field::new("order", "Integer").validated("> 0"))
}

pub fn credentials() -> ApiDescriptor {
    ApiDescriptor::new("credentials", "api/credentials")
        .description(
            "Credential is the login data belonging to an employee. \
             Credentials have the same id as the belonging employee.",
        )
        .endpoint(Endpoint::get("/", "Get all credentials.", "A page of credentials.").pageable())
        .endpoint(Endpoint::get(
            "/{id}",
            "Get a single credential by its id.",
            "One credential.",
        ))
        .endpoint(
            Endpoint::get(
                "/search/findByEmail",
                "Find credentials by an email address.",
                "A list of credentials.",
            )
            .param(Parameter::required("email", "String", "The email to search for.")),
        )
        .endpoint(
            Endpoint::post(
                "/",
                "Create a new credential. Returns the created object.",
                "A single credential.",
            )
            .secured("ROLE_ADMIN"),
        )
        .endpoint(
            Endpoint::put(
                "/{id}",
                "Update the credential identified by id. Returns the updated object.",
                "A credential.",
            )
            .secured("ROLE_ADMIN"),
        )
        .endpoint(
            Endpoint::delete("/{id}", "Delete the credential identified by id.", "Nothing")
                .secured("ROLE_ADMIN"),
        )
        .projection("allRolesOverview", "Contains all authorities.")
        .field(Field::new("id", "Long"))
        .field(Field::new("email", "String").validated("valid email address, unique"))
        .field(Field::new("enabled", "boolean"))
        .field(Field::new("locale", "String").validated("not empty"))
        .link("employee", "employees", "deletable, updateable by ROLE_ADMIN")
        .link("authorities", "authorities", "deletable, updateable by ROLE_ADMIN")
}

pub fn employees() -> ApiDescriptor {
    ApiDescriptor::new("employees", "api/employees")
        .endpoint(
            Endpoint::get("/", "Find all employees.", "A page of employees.")
                .secured("ROLE_SUPERVISOR")
                .pageable(),
        )
        .endpoint(
            Endpoint::get(
                "/{id}",
                "Get a single employee by her/his id.",
                "A single employee.",
            )
            .secured("ROLE_SUPERVISOR"),
        )
        .endpoint(
            Endpoint::get(
                "/{id}/self",
                "An accessor for employees to get their own object reduced to a few fields.",
                "A reduced employee, only the fields firstName, lastName and phoneNumber are present.",
            )
            .secured("Only the employee her/himself."),
        )
        .endpoint(
            Endpoint::post(
                "/",
                "Create a new employee. Returns the created object.",
                "A single employee.",
            )
            .secured("ROLE_ADMIN"),
        )
        .endpoint(
            Endpoint::post(
                "/createWithCredential",
                "Create a new employee together with his/her credential",
                "A single employee",
            )
            .secured("ROLE_ADMIN")
            .request_body(
                "Expects an object containing a valid <a href=\"employees.html\">employee</a> \
                 and <a href=\"credentials.html\">credential</a>.\
                 <pre>{\n\t\"employee\": { \"firstName\": ...},\n\t\"credential\": { \"email\": ...}\n}</pre>",
            ),
        )
        .endpoint(
            Endpoint::put(
                "/{id}",
                "Update an existing employee. If the leaveDate is in the past after the update \
                 the <a href=\"credentials.html\">credential</a> belonging to the employee will \
                 automatically be deactivated.",
                "A single employee.",
            )
            .secured("ROLE_SUPERVISOR"),
        )
        .endpoint(
            Endpoint::put(
                "/{id}/self",
                "An employee can update a restricted set of fields on his own employee entity \
                 with this method.",
                "A single reduced employee",
            )
            .secured("Only the employee her/himself.")
            .request_body(
                "The request body must be a reduced employee (can be partial):\
                 <pre>{ \"firstName\": ..., \"lastName\": ..., \"phoneNumber\": ...}</pre>",
            ),
        )
        .endpoint(
            Endpoint::delete("/{id}", "Delete the employee identified by id.", "Nothing.")
                .secured("ROLE_ADMIN"),
        )
        .projection("withCredential", "Has the credentials embedded.")
        .field(Field::new("id", "Long"))
        .field(Field::new("version", "Integer"))
        .field(Field::new("firstName", "String").validated("not empty"))
        .field(Field::new("lastName", "String").validated("not empty"))
        .field(Field::new("phoneNumber", "String"))
        .field(Field::new("title", "String"))
        .field(Field::new("salary", "Number"))
        .field(Field::new("hourlyCostRate", "Number"))
        .field(Field::new("joinDate", "Date"))
        .field(Field::new("leaveDate", "Date"))
        .field(Field::new(
            "federalState",
            "<a href=\"federalStates.html\">federal state</a>",
        ))
        .field(Field::new("vacationEntitlement", "Number"))
        .link("credential", "credentials", "no update or delete")
        .link("workTimes", "workTimes", "no update or delete")
        .link("billableTimes", "billableTimes", "no update or delete")
        .link("vacationRequests", "vacationRequests", "no update or delete")
        .link("approvedRequests", "approvedRequests", "no update or delete")
        .link("travelExpenseReports", "travelExpenseReports", "no update or delete")
}

/// The currently authenticated user. Has no representation of its own.
pub fn principal() -> ApiDescriptor {
    ApiDescriptor::new("principal", "api/principal")
        .description(
            "The principal is the employee belonging to the credential used to authenticate \
             the current request. Its representation is that of an \
             <a href=\"employees.html\">employee</a>.",
        )
        .endpoint(
            Endpoint::get(
                "/",
                "Get the employee that is currently logged in.",
                "A single employee.",
            )
            .secured("Any authenticated user."),
        )
        .delegates_to("employees")
}
