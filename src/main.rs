use std::sync::Arc;

use axum::Router;
use contoso_shop_api::{
    access_control::{
        application::services::header_current_user_provider_impl::HeaderCurrentUserProviderImpl,
        infrastructure::persistence::repositories::postgres::sqlx_audit_service_impl::SqlxAuditServiceImpl,
    },
    catalog::{
        build_catalog_router,
        interfaces::rest::resources::{
            create_product_request_resource::{
                CreateProductRequestResource, ListProductsQueryResource,
            },
            error_result_resource::{ErrorResultResource, FieldViolationResource},
            product_resource::ProductResource,
            update_product_request_resource::UpdateProductRequestResource,
        },
    },
    config::{app_config::AppConfig, logging},
};
use dotenvy::dotenv;
use sqlx::{PgPool, migrate};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(title = "ContosoShop API", version = "v1"),
    paths(
        contoso_shop_api::catalog::interfaces::rest::controllers::catalog_rest_controller::create_product,
        contoso_shop_api::catalog::interfaces::rest::controllers::catalog_rest_controller::update_product,
        contoso_shop_api::catalog::interfaces::rest::controllers::catalog_rest_controller::get_product,
        contoso_shop_api::catalog::interfaces::rest::controllers::catalog_rest_controller::list_products
    ),
    components(
        schemas(
            CreateProductRequestResource,
            UpdateProductRequestResource,
            ListProductsQueryResource,
            ProductResource,
            ErrorResultResource,
            FieldViolationResource
        )
    ),
    tags(
        (name = "catalog", description = "Product catalog bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::load();
    logging::init(&config.log_level);

    let pool = PgPool::connect(&config.connection_string)
        .await
        .expect("failed to connect to the ContosoShop database");

    migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run database migrations");

    let audit_service = Arc::new(SqlxAuditServiceImpl::new(pool.clone()));
    let current_user_provider = Arc::new(HeaderCurrentUserProviderImpl);

    let app = Router::new()
        .merge(build_catalog_router(pool, audit_service, current_user_provider))
        .merge(SwaggerUi::new("/swagger-ui").url("/swagger/v1/swagger.json", ApiDoc::openapi()))
        .layer(CorsLayer::very_permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(
        "ContosoShop API ({}) listening on http://localhost:{}",
        config.environment,
        config.port
    );
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
