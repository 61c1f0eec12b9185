use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::error::Result;
use mongodb::{Collection, Database};

use crate::models::product::{Product, AVAILABLE};
use crate::models::receipt::{DeleteReceipt, InsertReceipt, UpdateReceipt};
use crate::repository::{no_upsert, set_flag};

pub struct ProductRepository {
    collection: Collection<Product>,
}

impl ProductRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        ProductRepository { collection }
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<Product>> {
        let mut cursor = self.collection.find(filter, None).await?;
        let mut products = Vec::new();
        while let Some(product) = cursor.try_next().await? {
            products.push(product);
        }
        Ok(products)
    }

    pub async fn find_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.find_many(doc! { "category": category }).await
    }

    pub async fn find_by_seller(&self, seller_email: &str) -> Result<Vec<Product>> {
        self.find_many(doc! { "seller_email": seller_email }).await
    }

    /// Advertised listings that are still for sale.
    pub async fn find_advertised(&self) -> Result<Vec<Product>> {
        self.find_many(doc! { "advertised": true, "status": AVAILABLE }).await
    }

    pub async fn find_reported(&self) -> Result<Vec<Product>> {
        self.find_many(doc! { "reported": true }).await
    }

    pub async fn add_product(&self, product: Product) -> Result<InsertReceipt> {
        self.collection.insert_one(product, None).await.map(InsertReceipt::from)
    }

    pub async fn delete_product(&self, id: ObjectId) -> Result<DeleteReceipt> {
        let filter = doc! { "_id": id };
        self.collection.delete_one(filter, None).await.map(DeleteReceipt::from)
    }

    pub async fn advertise_product(&self, id: ObjectId) -> Result<UpdateReceipt> {
        self.flag_product(id, "advertised").await
    }

    pub async fn report_product(&self, id: ObjectId) -> Result<UpdateReceipt> {
        self.flag_product(id, "reported").await
    }

    async fn flag_product(&self, id: ObjectId, field: &str) -> Result<UpdateReceipt> {
        let filter = doc! { "_id": id };
        self.collection
            .update_one(filter, set_flag(field), no_upsert())
            .await
            .map(UpdateReceipt::from)
    }

    /// Marks every listing of the seller as verified.
    pub async fn verify_seller_products(&self, seller_email: &str) -> Result<UpdateReceipt> {
        let filter = doc! { "seller_email": seller_email };
        self.collection
            .update_many(filter, set_flag("verified"), no_upsert())
            .await
            .map(UpdateReceipt::from)
    }
}
