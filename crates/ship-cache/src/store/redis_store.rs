//! Redis implementation of ShipStore.
//!
//! Key layout:
//! - `ship:rec:{name_lower}`   hash: id, user1_id, user2_id, name, support_count
//! - `ship:pair:{min}:{max}`   canonical user pair -> name_lower
//! - `ship:board`              sorted set: name_lower scored by support count
//! - `ship:next_id`            id counter
//!
//! Creation claims the name with HSETNX before any other write; increments
//! run HINCRBY + ZINCRBY in one atomic pipeline so concurrent votes never
//! lose an update.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::instrument;

use ship_core::entities::Ship;
use ship_core::error::DomainError;
use ship_core::traits::{RepoResult, ShipStore};
use ship_core::value_objects::{canonical_pair, ShipId, UserId};

use crate::pool::RedisPool;

const REC_PREFIX: &str = "ship:rec:";
const PAIR_PREFIX: &str = "ship:pair:";
const BOARD_KEY: &str = "ship:board";
const SEQ_KEY: &str = "ship:next_id";

/// Redis implementation of ShipStore
#[derive(Clone)]
pub struct RedisShipStore {
    pool: RedisPool,
}

impl RedisShipStore {
    /// Create a new RedisShipStore
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    fn rec_key(name_lower: &str) -> String {
        format!("{REC_PREFIX}{name_lower}")
    }

    fn pair_key(user1: &UserId, user2: &UserId) -> String {
        let (a, b) = canonical_pair(user1, user2);
        format!("{PAIR_PREFIX}{a}:{b}")
    }
}

fn map_cache_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::CacheError(e.to_string())
}

/// Parse a record hash into a Ship.
///
/// A hash still missing its `id` field is a half-created record (the HSETNX
/// claim landed but the fill pipeline has not); treat it as absent.
fn parse_ship(map: &HashMap<String, String>) -> Option<Ship> {
    let id = map.get("id")?.parse::<i64>().ok()?;
    let support_count = map.get("support_count")?.parse::<i64>().ok()?;
    Some(Ship {
        id: ShipId::new(id),
        user1_id: UserId::new(map.get("user1_id")?.clone()),
        user2_id: UserId::new(map.get("user2_id")?.clone()),
        name: map.get("name")?.clone(),
        support_count,
    })
}

#[async_trait]
impl ShipStore for RedisShipStore {
    #[instrument(skip(self))]
    async fn create(&self, user1: &UserId, user2: &UserId, name: &str) -> RepoResult<Ship> {
        let name_lower = name.to_lowercase();
        let rec_key = Self::rec_key(&name_lower);
        let mut conn = self.pool.get().await.map_err(map_cache_error)?;

        // Claim the name before writing anything else
        let claimed: bool = conn
            .hset_nx(&rec_key, "name", name)
            .await
            .map_err(map_cache_error)?;
        if !claimed {
            return Err(DomainError::DuplicateName(name.to_string()));
        }

        let id: i64 = conn.incr(SEQ_KEY, 1).await.map_err(map_cache_error)?;

        redis::pipe()
            .atomic()
            .hset_multiple(
                &rec_key,
                &[
                    ("id", id.to_string()),
                    ("user1_id", user1.to_string()),
                    ("user2_id", user2.to_string()),
                    ("support_count", "0".to_string()),
                ],
            )
            .ignore()
            .set(Self::pair_key(user1, user2), &name_lower)
            .ignore()
            .zadd(BOARD_KEY, &name_lower, 0)
            .ignore()
            .query_async::<()>(&mut conn)
            .await
            .map_err(map_cache_error)?;

        Ok(Ship::new(
            ShipId::new(id),
            user1.clone(),
            user2.clone(),
            name.to_string(),
        ))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Ship>> {
        let mut conn = self.pool.get().await.map_err(map_cache_error)?;
        let map: HashMap<String, String> = conn
            .hgetall(Self::rec_key(&name.to_lowercase()))
            .await
            .map_err(map_cache_error)?;

        Ok(parse_ship(&map))
    }

    #[instrument(skip(self))]
    async fn find_by_pair(&self, user1: &UserId, user2: &UserId) -> RepoResult<Option<Ship>> {
        let mut conn = self.pool.get().await.map_err(map_cache_error)?;
        let name_lower: Option<String> = conn
            .get(Self::pair_key(user1, user2))
            .await
            .map_err(map_cache_error)?;

        let Some(name_lower) = name_lower else {
            return Ok(None);
        };

        let map: HashMap<String, String> = conn
            .hgetall(Self::rec_key(&name_lower))
            .await
            .map_err(map_cache_error)?;

        Ok(parse_ship(&map))
    }

    #[instrument(skip(self))]
    async fn rename(&self, user1: &UserId, user2: &UserId, new_name: &str) -> RepoResult<Ship> {
        let pair_key = Self::pair_key(user1, user2);
        let mut conn = self.pool.get().await.map_err(map_cache_error)?;

        let old_lower: Option<String> = conn.get(&pair_key).await.map_err(map_cache_error)?;
        let Some(old_lower) = old_lower else {
            return Err(DomainError::PairNotFound);
        };

        let map: HashMap<String, String> = conn
            .hgetall(Self::rec_key(&old_lower))
            .await
            .map_err(map_cache_error)?;
        let Some(ship) = parse_ship(&map) else {
            return Err(DomainError::PairNotFound);
        };

        let new_lower = new_name.to_lowercase();
        if new_lower == old_lower {
            // Case-only rename keeps the same record
            conn.hset::<_, _, _, ()>(Self::rec_key(&old_lower), "name", new_name)
                .await
                .map_err(map_cache_error)?;
            return Ok(Ship {
                name: new_name.to_string(),
                ..ship
            });
        }

        let claimed: bool = conn
            .hset_nx(Self::rec_key(&new_lower), "name", new_name)
            .await
            .map_err(map_cache_error)?;
        if !claimed {
            return Err(DomainError::DuplicateName(new_name.to_string()));
        }

        redis::pipe()
            .atomic()
            .hset_multiple(
                Self::rec_key(&new_lower),
                &[
                    ("id", ship.id.into_inner().to_string()),
                    ("user1_id", ship.user1_id.to_string()),
                    ("user2_id", ship.user2_id.to_string()),
                    ("support_count", ship.support_count.to_string()),
                ],
            )
            .ignore()
            .del(Self::rec_key(&old_lower))
            .ignore()
            .set(&pair_key, &new_lower)
            .ignore()
            .zrem(BOARD_KEY, &old_lower)
            .ignore()
            .zadd(BOARD_KEY, &new_lower, ship.support_count)
            .ignore()
            .query_async::<()>(&mut conn)
            .await
            .map_err(map_cache_error)?;

        Ok(Ship {
            name: new_name.to_string(),
            ..ship
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &str) -> RepoResult<()> {
        let name_lower = name.to_lowercase();
        let rec_key = Self::rec_key(&name_lower);
        let mut conn = self.pool.get().await.map_err(map_cache_error)?;

        let map: HashMap<String, String> = conn.hgetall(&rec_key).await.map_err(map_cache_error)?;
        let Some(ship) = parse_ship(&map) else {
            return Err(DomainError::ShipNotFound(name.to_string()));
        };

        let pair_key = Self::pair_key(&ship.user1_id, &ship.user2_id);
        let pair_target: Option<String> = conn.get(&pair_key).await.map_err(map_cache_error)?;

        let mut pipe = redis::pipe();
        pipe.atomic().del(&rec_key).ignore().zrem(BOARD_KEY, &name_lower).ignore();
        // Only drop the pair index if it still points at this ship
        if pair_target.as_deref() == Some(name_lower.as_str()) {
            pipe.del(&pair_key).ignore();
        }
        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(map_cache_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_support(&self, name: &str) -> RepoResult<i64> {
        let name_lower = name.to_lowercase();
        let rec_key = Self::rec_key(&name_lower);
        let mut conn = self.pool.get().await.map_err(map_cache_error)?;

        let exists: bool = conn.exists(&rec_key).await.map_err(map_cache_error)?;
        if !exists {
            return Err(DomainError::ShipNotFound(name.to_string()));
        }

        let (count,): (i64,) = redis::pipe()
            .atomic()
            .hincr(&rec_key, "support_count", 1)
            .zincr(BOARD_KEY, &name_lower, 1)
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(map_cache_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn set_support(&self, name: &str, value: i64) -> RepoResult<()> {
        if value < 0 {
            return Err(DomainError::InvalidSupportValue(value));
        }

        let name_lower = name.to_lowercase();
        let rec_key = Self::rec_key(&name_lower);
        let mut conn = self.pool.get().await.map_err(map_cache_error)?;

        let exists: bool = conn.exists(&rec_key).await.map_err(map_cache_error)?;
        if !exists {
            return Err(DomainError::ShipNotFound(name.to_string()));
        }

        redis::pipe()
            .atomic()
            .hset(&rec_key, "support_count", value)
            .ignore()
            .zadd(BOARD_KEY, &name_lower, value)
            .ignore()
            .query_async::<()>(&mut conn)
            .await
            .map_err(map_cache_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn top_by_score(&self, limit: usize) -> RepoResult<Vec<Ship>> {
        let mut conn = self.pool.get().await.map_err(map_cache_error)?;
        let members: Vec<String> = conn
            .zrange(BOARD_KEY, 0, -1)
            .await
            .map_err(map_cache_error)?;

        // The sorted set breaks score ties lexically; re-sort on id so ties
        // follow insertion order. The board holds one guild's ships, so
        // loading it whole is fine.
        let mut ships = Vec::with_capacity(members.len());
        for member in members {
            let map: HashMap<String, String> = conn
                .hgetall(Self::rec_key(&member))
                .await
                .map_err(map_cache_error)?;
            if let Some(ship) = parse_ship(&map) {
                ships.push(ship);
            }
        }

        ships.sort_by(|a, b| {
            b.support_count
                .cmp(&a.support_count)
                .then(a.id.cmp(&b.id))
        });
        ships.truncate(limit);

        Ok(ships)
    }
}
