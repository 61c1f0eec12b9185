use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, State};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::jwt::TokenKeys;
use crate::repository::UserRepository;

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub access_token: String,
}

/// Issues a one-hour token for a registered email. Unknown emails get an
/// empty token and 403, never an error.
#[get("/jwt?<email>")]
pub async fn issue_token(
    email: Option<String>,
    user_repo: &State<UserRepository>,
    keys: &State<TokenKeys>,
) -> Result<(Status, Json<AccessToken>)> {
    let denied = || {
        (
            Status::Forbidden,
            Json(AccessToken {
                access_token: String::new(),
            }),
        )
    };

    let Some(email) = email else {
        warn!("token requested without an email");
        return Ok(denied());
    };

    match user_repo.find_user_by_email(&email).await? {
        Some(_) => {
            let access_token = keys.create_token(&email)?;
            info!(%email, "issued access token");
            Ok((Status::Ok, Json(AccessToken { access_token })))
        }
        None => {
            warn!(%email, "token requested for unknown email");
            Ok(denied())
        }
    }
}
