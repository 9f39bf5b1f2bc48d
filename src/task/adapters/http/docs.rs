//! Machine-readable API description and browsable documentation page.
//!
//! The `OpenAPI` document is assembled from the same route constants and
//! field limits the handlers enforce, so it cannot drift from them.

use axum::{Json, Router, response::Html, routing::get};
use minijinja::{Environment, context};
use serde_json::{Value, json};

use super::error::{ApiError, INTERNAL_ERROR_MESSAGE, TASK_NOT_FOUND_MESSAGE};
use super::payload::{DESCRIPTION_FIELD, TITLE_FIELD};
use super::response::TASK_DELETED_MESSAGE;
use super::routes::{TASK_PATH, TASKS_PATH};
use crate::task::domain::{TaskDescription, TaskTitle};

/// Route serving the `OpenAPI` document.
pub const OPENAPI_PATH: &str = "/swagger.json";

/// Route serving the documentation page.
pub const DOCS_PATH: &str = "/docs";

/// Human-readable API title.
pub const API_TITLE: &str = "Task manager API";

const SWAGGER_UI_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>{{ title }}</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
    <script>
      window.onload = () => {
        window.ui = SwaggerUIBundle({ url: "{{ spec_url }}", dom_id: "#swagger-ui" });
      };
    </script>
  </body>
</html>
"##;

/// Builds the `OpenAPI` 3.0 description of the task routes.
#[must_use]
pub fn openapi_document() -> Value {
    let task_ref = json!({ "$ref": "#/components/schemas/Task" });
    let error_ref = json!({ "$ref": "#/components/schemas/Error" });
    let id_parameter = json!({
        "in": "path",
        "name": "id",
        "required": true,
        "schema": { "type": "integer", "minimum": 1 },
    });

    json!({
        "openapi": "3.0.3",
        "info": { "title": API_TITLE, "version": env!("CARGO_PKG_VERSION") },
        "tags": [{ "name": "Task manager", "description": "Task management" }],
        "paths": {
            TASKS_PATH: {
                "post": {
                    "tags": ["Task manager"],
                    "summary": "Create a task",
                    "requestBody": json_body("TaskCreate"),
                    "responses": {
                        "201": json_response("Task created", &task_ref),
                        "400": json_response("Validation error", &error_ref),
                    },
                },
                "get": {
                    "tags": ["Task manager"],
                    "summary": "List tasks",
                    "responses": {
                        "200": json_response(
                            "All tasks",
                            &json!({ "type": "array", "items": task_ref }),
                        ),
                    },
                },
            },
            TASK_PATH: {
                "get": {
                    "tags": ["Task manager"],
                    "summary": "Get a task by id",
                    "parameters": [id_parameter],
                    "responses": {
                        "200": json_response("The task", &task_ref),
                        "404": json_response(TASK_NOT_FOUND_MESSAGE, &error_ref),
                    },
                },
                "put": {
                    "tags": ["Task manager"],
                    "summary": "Update a task; absent fields are left unchanged",
                    "parameters": [id_parameter],
                    "requestBody": json_body("TaskUpdate"),
                    "responses": {
                        "200": json_response("The updated task", &task_ref),
                        "400": json_response("Validation error", &error_ref),
                        "404": json_response(TASK_NOT_FOUND_MESSAGE, &error_ref),
                    },
                },
                "delete": {
                    "tags": ["Task manager"],
                    "summary": "Delete a task",
                    "parameters": [id_parameter],
                    "responses": {
                        "200": json_response(
                            "Task deleted",
                            &json!({
                                "type": "object",
                                "properties": {
                                    "message": { "type": "string", "example": TASK_DELETED_MESSAGE },
                                },
                            }),
                        ),
                        "404": json_response(TASK_NOT_FOUND_MESSAGE, &error_ref),
                    },
                },
            },
        },
        "components": { "schemas": component_schemas() },
    })
}

fn component_schemas() -> Value {
    let title = json!({
        "type": "string",
        "minLength": 1,
        "maxLength": TaskTitle::MAX_CHARS,
        "example": "Buy milk",
    });
    let description = json!({
        "type": "string",
        "maxLength": TaskDescription::MAX_CHARS,
        "example": "2%",
    });

    json!({
        "Task": {
            "type": "object",
            "required": ["id", TITLE_FIELD, DESCRIPTION_FIELD, "created_at", "updated_at"],
            "properties": {
                "id": { "type": "integer", "readOnly": true },
                TITLE_FIELD: title,
                DESCRIPTION_FIELD: {
                    "type": "string",
                    "nullable": true,
                    "maxLength": TaskDescription::MAX_CHARS,
                },
                "created_at": { "type": "string", "format": "date-time", "readOnly": true },
                "updated_at": {
                    "type": "string",
                    "format": "date-time",
                    "nullable": true,
                    "readOnly": true,
                },
            },
        },
        "TaskCreate": {
            "type": "object",
            "additionalProperties": false,
            "required": [TITLE_FIELD],
            "properties": { TITLE_FIELD: title, DESCRIPTION_FIELD: description },
        },
        "TaskUpdate": {
            "type": "object",
            "additionalProperties": false,
            "properties": { TITLE_FIELD: title, DESCRIPTION_FIELD: description },
        },
        "Error": {
            "type": "object",
            "required": ["error"],
            "properties": {
                "error": { "type": "string", "example": INTERNAL_ERROR_MESSAGE },
            },
        },
    })
}

fn json_body(schema: &str) -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": format!("#/components/schemas/{schema}") },
            },
        },
    })
}

fn json_response(description: &str, schema: &Value) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } },
    })
}

/// Renders the documentation page pointing at [`OPENAPI_PATH`].
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the template fails to render.
pub fn render_docs_page() -> Result<String, ApiError> {
    let environment = Environment::new();
    environment
        .render_str(
            SWAGGER_UI_TEMPLATE,
            context! { title => API_TITLE, spec_url => OPENAPI_PATH },
        )
        .map_err(|err| ApiError::Internal(format!("failed to render docs page: {err}")))
}

async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

async fn docs_page() -> Result<Html<String>, ApiError> {
    render_docs_page().map(Html)
}

/// Documentation routes.
pub fn router() -> Router {
    Router::new()
        .route(OPENAPI_PATH, get(openapi))
        .route(DOCS_PATH, get(docs_page))
}
