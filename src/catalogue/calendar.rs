//! Booked time and the public-holiday calendar.

use crate::model::{ApiDescriptor, Endpoint, Field, Parameter};

fn interval(endpoint: Endpoint) -> Endpoint {
    endpoint
        .param(Parameter::required("start", "Date", "The start of the interval"))
        .param(Parameter::required("end", "Date", "The end of the interval"))
}

fn project_param() -> Parameter {
    Parameter::required("project", "Long", "The id of the project")
}

pub fn billable_times() -> ApiDescriptor {
    ApiDescriptor::new("billableTimes", "api/billableTimes")
        .description(
            "A billable time is an amount of minutes belonging to an employee and a project \
             that is put on the bill for this project. Billable times are typically created \
             from the <a href=\"../api/work_times.html\">work times</a> an employee has \
             entered for that day.",
        )
        .endpoint(
            Endpoint::get(
                "/{id}",
                "Get a single billable time by its id.",
                "One billable time.",
            )
            .secured("ROLE_SUPERVISOR"),
        )
        .endpoint(interval(
            Endpoint::get(
                "/search/findByProjectAndDateBetweenOrderByDateAsc",
                "Find work times by their project and the date between two given dates.",
                "List of billable times.",
            )
            .secured("ROLE_SUPERVISOR")
            .param(project_param()),
        ))
        .endpoint(interval(
            Endpoint::get(
                "/search/findByDateBetween",
                "Find all billable times between two dates.",
                "List of billable times.",
            )
            .secured("ROLE_ADMIN"),
        ))
        .endpoint(interval(
            Endpoint::get(
                "/findEmployeeMappingByProjectAndDateBetween",
                "Get all billable minutes for one project and employee in an interval summed up.",
                "Map of String to Integer (employee full name -> summed up minutes)",
            )
            .secured("ROLE_SUPERVISOR")
            .param(project_param()),
        ))
        .endpoint(
            Endpoint::post(
                "/",
                "Create a new billable time. Returns the created object.",
                "A single billable time.",
            )
            .secured("ROLE_SUPERVISOR"),
        )
        .endpoint(
            Endpoint::put(
                "/{id}",
                "Update the billable time identified by id. Returns the updated object.",
                "A billable time.",
            )
            .secured("ROLE_SUPERVISOR"),
        )
        .endpoint(
            Endpoint::delete("/{id}", "Delete the billable time identified by id.", "Nothing")
                .secured("ROLE_SUPERVISOR"),
        )
        .projection("withProject", "Contains the project embedded")
        .field(Field::new("id", "Long"))
        .field(Field::new("version", "Integer"))
        .field(Field::new("date", "Date").validated("not null"))
        .field(Field::new("minutes", "Integer").validated("> 0, not null"))
        .link("employee", "employees", "not deletable, updateable by ROLE_SUPERVISOR")
        .link("project", "projects", "not deletable, updateable by ROLE_SUPERVISOR")
}

pub fn federal_states() -> ApiDescriptor {
    ApiDescriptor::new("federalStates", "api/federalStates")
        .description("Get all federal states in Germany.")
        .endpoint(Endpoint::get(
            "/",
            "Get all federal states.",
            "A list of federal states.",
        ))
        .field(Field::new("name", "enum constant"))
        .field(Field::new("state", "String"))
}

pub fn holidays() -> ApiDescriptor {
    ApiDescriptor::new("holidays", "api/holidays")
        .description("Public holidays that are different for each state.")
        .endpoint(Endpoint::get("/", "Get all holidays.", "A list of holidays."))
        .endpoint(Endpoint::get(
            "/{id}",
            "Get a single holiday by its id.",
            "One holiday.",
        ))
        .endpoint(
            Endpoint::get(
                "/search/findByFederalStateAndDayBetween",
                "Find holidays for a federal state between two dates.",
                "A list of holidays.",
            )
            .param(Parameter::required(
                "federalState",
                "<a href=\"federalStates.html\">federal state</a>",
                "The federal state to search for.",
            ))
            .param(Parameter::required("start", "Date", "The start of the interval."))
            .param(Parameter::required("end", "Date", "The end of the interval.")),
        )
        .endpoint(Endpoint::post(
            "/",
            "Create a new holiday. Returns the created object.",
            "A single holiday.",
        ))
        .endpoint(Endpoint::put(
            "/{id}",
            "Update the holiday identified by id. Returns the updated object.",
            "A single holiday.",
        ))
        .endpoint(Endpoint::delete(
            "/{id}",
            "Delete a the holiday identified by id.",
            "Nothing",
        ))
        .field(Field::new("id", "Long"))
        .field(Field::new("day", "Date"))
        .field(Field::new("name", "String"))
        .field(Field::new(
            "federalState",
            "<a href=\"federalStates.html\">federal state</a>",
        ))
}
