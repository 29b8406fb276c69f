use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
};
use validator::Validate;

use crate::access_control::{
    application::services::header_current_user_provider_impl::USER_ID_HEADER,
    domain::{
        model::value_objects::current_user_id::CurrentUserId,
        services::current_user_provider::CurrentUserProvider,
    },
};
use crate::catalog::{
    domain::{
        model::{
            commands::{
                create_product_command::CreateProductCommand,
                update_product_command::UpdateProductCommand,
            },
            enums::catalog_domain_error::CatalogDomainError,
            queries::{get_product_query::GetProductQuery, list_products_query::ListProductsQuery},
        },
        services::{
            catalog_command_service::CatalogCommandService,
            catalog_query_service::CatalogQueryService,
        },
    },
    interfaces::rest::resources::{
        create_product_request_resource::{CreateProductRequestResource, ListProductsQueryResource},
        error_result_resource::ErrorResultResource,
        product_resource::ProductResource,
        update_product_request_resource::UpdateProductRequestResource,
    },
};

#[derive(Clone)]
pub struct CatalogRestControllerState {
    pub command_service: Arc<dyn CatalogCommandService>,
    pub query_service: Arc<dyn CatalogQueryService>,
    pub current_user_provider: Arc<dyn CurrentUserProvider>,
}

pub fn router(state: CatalogRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/catalog/products", post(create_product))
        .route("/api/v1/catalog/products", get(list_products))
        .route("/api/v1/catalog/products/:product_id", get(get_product))
        .route("/api/v1/catalog/products/:product_id", put(update_product))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/catalog/products",
    tag = "catalog",
    request_body = CreateProductRequestResource,
    responses(
        (status = 201, description = "Product created", body = ProductResource),
        (status = 400, description = "Invalid payload", body = ErrorResultResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResultResource)
    )
)]
pub async fn create_product(
    State(state): State<CatalogRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<CreateProductRequestResource>,
) -> Result<(StatusCode, Json<ProductResource>), (StatusCode, Json<ErrorResultResource>)> {
    if let Err(validation_errors) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResultResource::from_validation_errors(
                &validation_errors,
            )),
        ));
    }

    let command = CreateProductCommand::new(
        request.title,
        request.short_description,
        request.price,
        request.quantity,
        request.departament_id,
    )
    .map_err(map_domain_error)?;

    let actor = resolve_actor(&state, &headers);
    let created = state
        .command_service
        .handle_create(command, &actor)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(ProductResource::from_entity(&created))))
}

#[utoipa::path(
    put,
    path = "/api/v1/catalog/products/{product_id}",
    tag = "catalog",
    params(("product_id" = i32, Path, description = "Product identifier")),
    request_body = UpdateProductRequestResource,
    responses(
        (status = 200, description = "Product updated", body = ProductResource),
        (status = 400, description = "Invalid payload", body = ErrorResultResource),
        (status = 404, description = "Product not found", body = ErrorResultResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResultResource)
    )
)]
pub async fn update_product(
    State(state): State<CatalogRestControllerState>,
    Path(product_id): Path<i32>,
    headers: HeaderMap,
    Json(request): Json<UpdateProductRequestResource>,
) -> Result<Json<ProductResource>, (StatusCode, Json<ErrorResultResource>)> {
    if let Err(validation_errors) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResultResource::from_validation_errors(
                &validation_errors,
            )),
        ));
    }

    let command = UpdateProductCommand::new(
        product_id,
        request.title,
        request.short_description,
        request.price,
        request.quantity,
        request.departament_id,
    )
    .map_err(map_domain_error)?;

    let actor = resolve_actor(&state, &headers);
    let updated = state
        .command_service
        .handle_update(command, &actor)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ProductResource::from_entity(&updated)))
}

#[utoipa::path(
    get,
    path = "/api/v1/catalog/products/{product_id}",
    tag = "catalog",
    params(("product_id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product detail", body = ProductResource),
        (status = 404, description = "Product not found", body = ErrorResultResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResultResource)
    )
)]
pub async fn get_product(
    State(state): State<CatalogRestControllerState>,
    Path(product_id): Path<i32>,
) -> Result<Json<ProductResource>, (StatusCode, Json<ErrorResultResource>)> {
    let query = GetProductQuery::new(product_id);
    let product = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ProductResource::from_entity(&product)))
}

#[utoipa::path(
    get,
    path = "/api/v1/catalog/products",
    tag = "catalog",
    params(("departament_id" = Option<i32>, Query, description = "Only products filed under this departament")),
    responses(
        (status = 200, description = "Catalog products", body = [ProductResource]),
        (status = 400, description = "Invalid filter", body = ErrorResultResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResultResource)
    )
)]
pub async fn list_products(
    State(state): State<CatalogRestControllerState>,
    Query(query): Query<ListProductsQueryResource>,
) -> Result<Json<Vec<ProductResource>>, (StatusCode, Json<ErrorResultResource>)> {
    let query = ListProductsQuery::new(query.departament_id).map_err(map_domain_error)?;
    let products = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    let payload = products.iter().map(ProductResource::from_entity).collect();

    Ok(Json(payload))
}

fn resolve_actor(state: &CatalogRestControllerState, headers: &HeaderMap) -> CurrentUserId {
    let user_header = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok());

    state.current_user_provider.resolve(user_header)
}

fn map_domain_error(error: CatalogDomainError) -> (StatusCode, Json<ErrorResultResource>) {
    let status = match error {
        CatalogDomainError::InvalidTitle
        | CatalogDomainError::InvalidShortDescription
        | CatalogDomainError::InvalidPrice
        | CatalogDomainError::InvalidDepartament => StatusCode::BAD_REQUEST,
        CatalogDomainError::ProductNotFound => StatusCode::NOT_FOUND,
        CatalogDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResultResource {
            message: error.to_string(),
            errors: Vec::new(),
        }),
    )
}
