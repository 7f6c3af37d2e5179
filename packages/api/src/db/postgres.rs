use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use store::{
    AgeCategory, Location, Memory, MemoryFilter, MemoryType, NewMemory, NewTravel, RecordStore,
    StoreError, Travel,
};

/// RecordStore backed by PostgreSQL.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[derive(Debug, FromRow)]
struct MemoryRow {
    id: Uuid,
    title: String,
    description: String,
    images: Vec<String>,
    age_category: String,
    #[sqlx(rename = "type")]
    kind: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MemoryRow> for Memory {
    type Error = StoreError;

    fn try_from(row: MemoryRow) -> Result<Self, Self::Error> {
        let age_category: AgeCategory = row
            .age_category
            .parse()
            .map_err(|e| StoreError::Corrupt(format!("memory {}: {e}", row.id)))?;
        let kind: MemoryType = row
            .kind
            .parse()
            .map_err(|e| StoreError::Corrupt(format!("memory {}: {e}", row.id)))?;

        Ok(Memory {
            id: row.id,
            title: row.title,
            description: row.description,
            images: row.images,
            age_category,
            r#type: kind,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TravelRow {
    id: Uuid,
    title: String,
    description: String,
    location_name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    images: Vec<String>,
    date_visited: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TravelRow> for Travel {
    fn from(row: TravelRow) -> Self {
        Travel {
            id: row.id,
            title: row.title,
            description: row.description,
            location: Location {
                name: row.location_name,
                latitude: row.latitude,
                longitude: row.longitude,
                country: row.country,
            },
            images: row.images,
            date_visited: row.date_visited,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn list_memories(&self, filter: MemoryFilter) -> Result<Vec<Memory>, StoreError> {
        let rows: Vec<MemoryRow> = sqlx::query_as(
            "SELECT id, title, description, images, age_category, type, created_at, updated_at
             FROM memories
             WHERE ($1::text IS NULL OR age_category = $1)
               AND ($2::text IS NULL OR type = $2)
             ORDER BY created_at DESC",
        )
        .bind(filter.age_category.map(AgeCategory::as_str))
        .bind(filter.r#type.map(MemoryType::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        rows.into_iter().map(Memory::try_from).collect()
    }

    async fn insert_memory(&self, memory: NewMemory) -> Result<Memory, StoreError> {
        let row: MemoryRow = sqlx::query_as(
            "INSERT INTO memories (title, description, images, age_category, type, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING id, title, description, images, age_category, type, created_at, updated_at",
        )
        .bind(&memory.title)
        .bind(&memory.description)
        .bind(&memory.images)
        .bind(memory.age_category.as_str())
        .bind(memory.r#type.as_str())
        .bind(memory.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;

        tracing::info!(id = %row.id, "memory inserted");
        Memory::try_from(row)
    }

    async fn list_travels(&self) -> Result<Vec<Travel>, StoreError> {
        let rows: Vec<TravelRow> = sqlx::query_as(
            "SELECT id, title, description, location_name, latitude, longitude, country,
                    images, date_visited, created_at, updated_at
             FROM travels
             ORDER BY date_visited DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(rows.into_iter().map(Travel::from).collect())
    }

    async fn insert_travel(&self, travel: NewTravel) -> Result<Travel, StoreError> {
        let row: TravelRow = sqlx::query_as(
            "INSERT INTO travels (title, description, location_name, latitude, longitude, country,
                                  images, date_visited, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING id, title, description, location_name, latitude, longitude, country,
                       images, date_visited, created_at, updated_at",
        )
        .bind(&travel.title)
        .bind(&travel.description)
        .bind(&travel.location.name)
        .bind(travel.location.latitude)
        .bind(travel.location.longitude)
        .bind(&travel.location.country)
        .bind(&travel.images)
        .bind(travel.date_visited)
        .bind(travel.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;

        tracing::info!(id = %row.id, "travel inserted");
        Ok(Travel::from(row))
    }

    async fn count_memories(&self) -> Result<usize, StoreError> {
        count(&self.pool, "SELECT COUNT(*) FROM memories").await
    }

    async fn count_travels(&self) -> Result<usize, StoreError> {
        count(&self.pool, "SELECT COUNT(*) FROM travels").await
    }
}

async fn count(pool: &PgPool, query: &'static str) -> Result<usize, StoreError> {
    let total: i64 = sqlx::query_scalar(query)
        .fetch_one(pool)
        .await
        .map_err(backend)?;
    usize::try_from(total).map_err(|_| StoreError::Corrupt(format!("negative row count {total}")))
}
