use rocket::serde::json::Json;
use rocket::{delete, get, patch, post, State};
use tracing::info;

use crate::error::Result;
use crate::models::parse_object_id;
use crate::models::receipt::{DeleteReceipt, UpdateReceipt};
use crate::models::user::{Registration, User, UserRole};
use crate::repository::{ProductRepository, UserRepository};
use crate::services::AuthUser;

#[get("/users")]
pub async fn get_all_users(user_repo: &State<UserRepository>) -> Result<Json<Vec<User>>> {
    Ok(Json(user_repo.get_all_users().await?))
}

#[get("/sellers")]
pub async fn get_sellers(_auth: AuthUser, user_repo: &State<UserRepository>) -> Result<Json<Vec<User>>> {
    Ok(Json(user_repo.find_users_by_role(UserRole::Seller).await?))
}

#[get("/buyers")]
pub async fn get_buyers(_auth: AuthUser, user_repo: &State<UserRepository>) -> Result<Json<Vec<User>>> {
    Ok(Json(user_repo.find_users_by_role(UserRole::Buyer).await?))
}

/// Verifies a seller: all of their listings first, then the account.
/// The two writes are independent; a failure in between leaves the
/// listings verified and the account not.
#[patch("/seller/verify?<email>")]
pub async fn verify_seller(
    auth: AuthUser,
    email: Option<String>,
    user_repo: &State<UserRepository>,
    product_repo: &State<ProductRepository>,
) -> Result<Json<UpdateReceipt>> {
    let email = auth.ensure_identity(email.as_deref())?;

    let products = product_repo.verify_seller_products(email).await?;
    user_repo.verify_user(email).await?;
    info!(%email, listings = products.modified_count, "seller verified");

    Ok(Json(products))
}

#[delete("/user/delete/<id>")]
pub async fn delete_user(
    _auth: AuthUser,
    id: &str,
    user_repo: &State<UserRepository>,
) -> Result<Json<DeleteReceipt>> {
    let id = parse_object_id(id)?;
    let receipt = user_repo.delete_user(id).await?;
    info!(%id, deleted = receipt.deleted_count, "user delete");
    Ok(Json(receipt))
}

#[get("/user?<email>")]
pub async fn get_user(
    auth: AuthUser,
    email: Option<String>,
    user_repo: &State<UserRepository>,
) -> Result<Json<Vec<User>>> {
    let email = auth.ensure_identity(email.as_deref())?;
    Ok(Json(user_repo.find_users_by_email(email).await?))
}

#[post("/users", data = "<new_user>")]
pub async fn register_user(
    new_user: Json<User>,
    user_repo: &State<UserRepository>,
) -> Result<Json<Registration>> {
    Ok(Json(user_repo.register_user(new_user.into_inner()).await?))
}
