//! Tests for the recipe-service client

use super::*;
use crate::config::Settings;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> RecipesApi {
    let settings = Settings::new(&server.uri(), "test-token").unwrap();
    RecipesApi::new(settings)
}

fn page_body(items: serde_json::Value, page: u32, total_pages: u32) -> serde_json::Value {
    json!({
        "page": page,
        "perPage": 50,
        "total": items.as_array().map_or(0, Vec::len),
        "totalPages": total_pages,
        "items": items,
    })
}

#[tokio::test]
async fn test_all_recipes_walks_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            json!([{"id": "a", "name": "Stew", "slug": "stew"}]),
            1,
            2,
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            json!([{"id": "b", "name": "Soup", "slug": "soup"}]),
            2,
            2,
        )))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let recipes = api.all_recipes().await.unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].name, "Stew");
    assert_eq!(recipes[1].name, "Soup");
}

#[tokio::test]
async fn test_recipe_detail_keeps_unknown_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/recipes/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "a",
            "name": "Stew",
            "slug": "stew",
            "description": "hearty",
            "recipeInstructions": [{"text": "Brown the beef."}],
            "recipeIngredient": [],
            "recipeCategory": [],
            "tags": [],
            "tools": [],
            "rating": 4,
            "orgURL": "https://example.com/stew"
        })))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let recipe = api.recipe("a").await.unwrap();

    assert_eq!(recipe.name, "Stew");
    assert_eq!(recipe.recipe_instructions[0].text, "Brown the beef.");
    // Unmodeled fields land in the capture bag and survive a PUT round trip.
    assert_eq!(recipe.extra.get("rating"), Some(&json!(4)));

    Mock::given(method("PUT"))
        .and(path("/api/recipes/a"))
        .and(body_partial_json(json!({
            "rating": 4,
            "orgURL": "https://example.com/stew"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    api.update_recipe(&recipe).await.unwrap();
}

#[tokio::test]
async fn test_create_food() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/foods"))
        .and(body_json(json!({"name": "Courgette"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "f9",
            "name": "Courgette"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let food = api.create_food("Courgette").await.unwrap();

    assert_eq!(food.id, "f9");
    assert_eq!(food.name, "Courgette");
    assert!(food.aliases.is_empty());
}

#[tokio::test]
async fn test_merge_foods_body_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/foods/merge"))
        .and(body_json(json!({"fromFood": "f2", "toFood": "f1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    api.merge_foods("f1", "f2").await.unwrap();
}

#[tokio::test]
async fn test_recipe_link() {
    let settings = Settings::new("https://recipes.example.com", "t").unwrap();
    let api = RecipesApi::new(settings);
    assert_eq!(
        api.recipe_link("beef-stew"),
        "https://recipes.example.com/g/home/r/beef-stew"
    );
}

#[test]
fn test_food_deserializes_aliases_and_label() {
    let food: Food = serde_json::from_value(json!({
        "id": "f1",
        "name": "Tomato",
        "pluralName": "Tomatoes",
        "description": "",
        "aliases": [{"name": "Tomatoe"}],
        "label": {"id": "l1", "name": "Produce"}
    }))
    .unwrap();

    assert_eq!(food.plural_name.as_deref(), Some("Tomatoes"));
    assert_eq!(food.aliases[0].name, "Tomatoe");
    assert_eq!(food.label.as_ref().unwrap().name, "Produce");
}
