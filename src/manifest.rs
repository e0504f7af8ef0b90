// src/manifest.rs

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{resolve_server_url, PluginConfig};
use crate::AppState;

// --- Manifest Document ---

/// OpenAPI-shaped plugin manifest served to tool-discovery consumers.
/// Everything except `servers[0].url` is a compile-time-fixed literal.
#[derive(Serialize, Debug)]
pub struct Manifest {
    pub openapi: &'static str,
    pub info: Info,
    pub servers: Vec<Server>,
    #[serde(rename = "x-mb")]
    pub x_mb: ExtensionBlock,
    pub paths: Value,
}

#[derive(Serialize, Debug)]
pub struct Info {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

#[derive(Serialize, Debug)]
pub struct Server {
    // Omitted entirely when no URL resolves, never serialized as null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Vendor extension block (`x-mb`) describing the assistant persona.
#[derive(Serialize, Debug)]
pub struct ExtensionBlock {
    #[serde(rename = "account-id")]
    pub account_id: &'static str,
    pub assistant: Assistant,
}

#[derive(Serialize, Debug)]
pub struct Assistant {
    pub name: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
    pub tools: Value,
}

impl Manifest {
    pub fn new(server_url: Option<String>) -> Self {
        Manifest {
            openapi: "3.0.0",
            info: Info {
                title: "Simple Weather API",
                description: "API for retrieving basic weather information for a given city.",
                version: "1.0.0",
            },
            servers: vec![Server { url: server_url }],
            x_mb: ExtensionBlock {
                account_id: "microchipgnu.mintbase.near",
                assistant: Assistant {
                    name: "Weather Informer",
                    description: "An assistant that provides weather information",
                    instructions: "Get weather information for a given city and ALWAYS generate an image if successful retrieval from the API. If not, ask the user to claim a token.",
                    tools: json!([{ "type": "generate-image" }]),
                },
            },
            paths: operation_paths(),
        }
    }
}

/// OpenAPI operation descriptors for the two documented endpoints. Note that
/// `/api/weather` is documentation only; no handler for it lives here.
fn operation_paths() -> Value {
    json!({
        "/api/weather": {
            "get": {
                "tags": ["Weather"],
                "summary": "Get weather information",
                "description": "This endpoint returns basic weather information for a specified city.",
                "operationId": "get-weather",
                "parameters": [
                    {
                        "name": "city",
                        "in": "query",
                        "description": "The name of the city to get weather information for.",
                        "required": true,
                        "schema": {
                            "type": "string"
                        },
                        "example": "London"
                    }
                ],
                "responses": {
                    "200": {
                        "description": "Successful response",
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "city": {
                                            "type": "string"
                                        },
                                        "temperature": {
                                            "type": "number"
                                        },
                                        "description": {
                                            "type": "string"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "400": {
                        "description": "Bad request",
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "error": {
                                            "type": "string"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "/api/time": {
            "get": {
                "tags": ["Time"],
                "summary": "Get current time",
                "description": "This endpoint returns the current time.",
                "operationId": "get-time",
                "responses": {
                    "200": {
                        "description": "Successful response",
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "currentTime": {
                                            "type": "string",
                                            "format": "date-time"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

// --- Handler ---

/// GET /api/ai-plugin. The config file is consulted fresh on every request;
/// an unreadable file is non-fatal and falls back to the deployment URL.
pub async fn get_manifest(State(state): State<Arc<AppState>>) -> Json<Manifest> {
    info!("Handling /api/ai-plugin request");

    let config = PluginConfig::load(&state.config_path).unwrap_or_else(|e| {
        warn!(
            "Failed to read {}, using default values: {}",
            state.config_path.display(),
            e
        );
        PluginConfig::default()
    });

    let server_url = resolve_server_url(config, state.deployment_url.as_deref());
    Json(Manifest::new(server_url))
}
