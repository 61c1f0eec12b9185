use rocket::serde::json::Json;
use rocket::{delete, get, patch, post, State};
use tracing::info;

use crate::error::Result;
use crate::models::parse_object_id;
use crate::models::product::Product;
use crate::models::receipt::{DeleteReceipt, InsertReceipt, UpdateReceipt};
use crate::repository::ProductRepository;
use crate::services::AuthUser;

#[get("/category/<id>")]
pub async fn get_category_products(
    id: &str,
    product_repo: &State<ProductRepository>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(product_repo.find_by_category(id).await?))
}

#[post("/products", data = "<new_product>")]
pub async fn add_product(
    auth: AuthUser,
    new_product: Json<Product>,
    product_repo: &State<ProductRepository>,
) -> Result<Json<InsertReceipt>> {
    let receipt = product_repo.add_product(new_product.into_inner()).await?;
    info!(posted_by = %auth.email, "product listed");
    Ok(Json(receipt))
}

/// Listings owned by the caller.
#[get("/products?<email>")]
pub async fn get_seller_products(
    auth: AuthUser,
    email: Option<String>,
    product_repo: &State<ProductRepository>,
) -> Result<Json<Vec<Product>>> {
    let email = auth.ensure_identity(email.as_deref())?;
    Ok(Json(product_repo.find_by_seller(email).await?))
}

#[delete("/product/delete/<id>")]
pub async fn delete_product(
    _auth: AuthUser,
    id: &str,
    product_repo: &State<ProductRepository>,
) -> Result<Json<DeleteReceipt>> {
    let id = parse_object_id(id)?;
    Ok(Json(product_repo.delete_product(id).await?))
}

#[get("/products/advertised")]
pub async fn get_advertised_products(
    product_repo: &State<ProductRepository>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(product_repo.find_advertised().await?))
}

#[patch("/product/advertise/<id>")]
pub async fn advertise_product(
    _auth: AuthUser,
    id: &str,
    product_repo: &State<ProductRepository>,
) -> Result<Json<UpdateReceipt>> {
    let id = parse_object_id(id)?;
    Ok(Json(product_repo.advertise_product(id).await?))
}

#[get("/products/reports")]
pub async fn get_reported_products(
    _auth: AuthUser,
    product_repo: &State<ProductRepository>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(product_repo.find_reported().await?))
}

#[patch("/product/report/<id>")]
pub async fn report_product(
    auth: AuthUser,
    id: &str,
    product_repo: &State<ProductRepository>,
) -> Result<Json<UpdateReceipt>> {
    let id = parse_object_id(id)?;
    let receipt = product_repo.report_product(id).await?;
    info!(%id, reported_by = %auth.email, "product reported");
    Ok(Json(receipt))
}
