// src/repository/user_repository.rs
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::error::Result;
use mongodb::{Collection, Database};
use tracing::{debug, info};

use crate::models::receipt::{DeleteReceipt, UpdateReceipt};
use crate::models::user::{Registration, User, UserRole};
use crate::repository::{no_upsert, set_flag};

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<User>("user");
        UserRepository { collection }
    }

    async fn find_many(&self, filter: impl Into<Option<Document>>) -> Result<Vec<User>> {
        let mut cursor = self.collection.find(filter, None).await?;
        let mut users = Vec::new();
        while let Some(user) = cursor.try_next().await? {
            users.push(user);
        }
        Ok(users)
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        self.find_many(None).await
    }

    pub async fn find_users_by_role(&self, role: UserRole) -> Result<Vec<User>> {
        self.find_many(doc! { "type": role.as_str() }).await
    }

    pub async fn find_users_by_email(&self, email: &str) -> Result<Vec<User>> {
        self.find_many(doc! { "email": email }).await
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.collection.find_one(doc! { "email": email }, None).await
    }

    /// Inserts the user unless the email is already registered, in which
    /// case the existing records are returned. Check and insert are two
    /// separate round trips: concurrent registrations can both insert.
    pub async fn register_user(&self, user: User) -> Result<Registration> {
        let existing = self.find_many(doc! { "email": user.email.clone() }).await?;
        if !existing.is_empty() {
            debug!(email = %user.email, "user already registered");
            return Ok(Registration::Existing(existing));
        }

        let result = self.collection.insert_one(&user, None).await?;
        info!(email = %user.email, "registered user");
        Ok(Registration::Created(result.into()))
    }

    pub async fn verify_user(&self, email: &str) -> Result<UpdateReceipt> {
        let filter = doc! { "email": email };
        self.collection
            .update_one(filter, set_flag("verified"), no_upsert())
            .await
            .map(UpdateReceipt::from)
    }

    pub async fn delete_user(&self, id: ObjectId) -> Result<DeleteReceipt> {
        let filter = doc! { "_id": id };
        self.collection.delete_one(filter, None).await.map(DeleteReceipt::from)
    }
}
