//! When steps for task CRUD BDD scenarios.

use super::world::TaskApiWorld;
use axum::http::Method;
use rstest_bdd_macros::when;
use serde_json::json;

#[when(r#"a client creates a task titled "{title}""#)]
fn create_titled_task(world: &mut TaskApiWorld, title: String) -> Result<(), eyre::Report> {
    let body = json!({ "title": title }).to_string();
    world.send(Method::POST, "/tasks", Some(body))
}

#[when("a client creates a task with a blank title")]
fn create_blank_task(world: &mut TaskApiWorld) -> Result<(), eyre::Report> {
    let body = json!({ "title": "   " }).to_string();
    world.send(Method::POST, "/tasks", Some(body))
}

#[when(r#"the client sets the description of task {id:i32} to "{description}""#)]
fn update_description(
    world: &mut TaskApiWorld,
    id: i32,
    description: String,
) -> Result<(), eyre::Report> {
    let body = json!({ "description": description }).to_string();
    world.send(Method::PUT, &format!("/tasks/{id}"), Some(body))
}

#[when("the client deletes task {id:i32}")]
fn delete_task(world: &mut TaskApiWorld, id: i32) -> Result<(), eyre::Report> {
    world.send(Method::DELETE, &format!("/tasks/{id}"), None)
}

#[when("the client fetches task {id:i32}")]
fn fetch_task(world: &mut TaskApiWorld, id: i32) -> Result<(), eyre::Report> {
    world.send(Method::GET, &format!("/tasks/{id}"), None)
}
