use rocket::serde::json::Json;
use rocket::{get, post, routes, Route, State};

use crate::graphql::{ApiSchema, Caller};

#[get("/")]
fn root() -> &'static str {
    "hello"
}

#[post("/api", data = "<request>", format = "json")]
async fn graphql_request(
    schema: &State<ApiSchema>,
    caller: Caller,
    request: Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(schema.execute(request.into_inner().data(caller)).await)
}

pub fn all_routes() -> Vec<Route> {
    routes![
        root,
        graphql_request,
    ]
}
