use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use crate::model::{Filter, NewProverb, NewStory, Proverb, Story};
use crate::server::AppState;
use crate::Result;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct StoryParams {
    pub language: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProverbParams {
    pub language: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn list_stories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StoryParams>,
) -> Result<Json<Vec<Story>>> {
    let filter = Filter::new(params.language, params.category);
    let stories = state.store.lock().await.list_stories(&filter)?;
    Ok(Json(stories))
}

pub async fn create_story(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<NewStory>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(request) = payload?;
    let story = request.validate()?;
    state.store.lock().await.insert_story(&story)?;
    tracing::info!(language = %story.language, category = %story.category, "Story added: {}", story.title);

    Ok(Json(MessageResponse {
        message: "Story added successfully",
    }))
}

pub async fn list_proverbs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProverbParams>,
) -> Result<Json<Vec<Proverb>>> {
    let filter = Filter::new(params.language, params.region);
    let proverbs = state.store.lock().await.list_proverbs(&filter)?;
    Ok(Json(proverbs))
}

pub async fn create_proverb(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<NewProverb>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(request) = payload?;
    let proverb = request.validate()?;
    state.store.lock().await.insert_proverb(&proverb)?;
    tracing::info!(language = %proverb.language, region = %proverb.region, "Proverb added");

    Ok(Json(MessageResponse {
        message: "Proverb added successfully",
    }))
}

pub async fn list_languages(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>> {
    let languages = state.store.lock().await.languages()?;
    Ok(Json(languages))
}
