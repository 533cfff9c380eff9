//! Object pooling to avoid per-frame allocation churn.
//!
//! A pool owns a free list of idle values; `get` pops-or-creates and applies
//! a caller-supplied reinitializer, `release` returns the value unless the
//! free list is at capacity (then the value is simply dropped). Single
//! threaded cooperative access only - no locking.

use std::collections::HashMap;

/// Pool usage counters, exposed for health checks and HUD debugging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolStats {
    /// Idle values currently held
    pub pool_size: usize,
    /// Values handed out and not yet released
    pub active_count: usize,
    pub total_created: u64,
    pub total_reused: u64,
    /// Reused fraction of all `get` calls (0 when none yet)
    pub reuse_ratio: f64,
}

pub struct ObjectPool<T> {
    idle: Vec<T>,
    max_size: usize,
    active_count: usize,
    total_created: u64,
    total_reused: u64,
    factory: Box<dyn Fn() -> T>,
}

impl<T> ObjectPool<T> {
    pub fn new(max_size: usize, factory: impl Fn() -> T + 'static) -> Self {
        Self {
            idle: Vec::with_capacity(max_size),
            max_size,
            active_count: 0,
            total_created: 0,
            total_reused: 0,
            factory: Box::new(factory),
        }
    }

    /// Hand out a ready-to-use value, reusing an idle one when available.
    /// `init` reinitializes the value in place before it is returned.
    pub fn get(&mut self, init: impl FnOnce(&mut T)) -> T {
        let mut value = match self.idle.pop() {
            Some(v) => {
                self.total_reused += 1;
                v
            }
            None => {
                self.total_created += 1;
                (self.factory)()
            }
        };
        init(&mut value);
        self.active_count += 1;
        value
    }

    /// Return a value to the free list. Over-capacity returns drop the value.
    pub fn release(&mut self, value: T) {
        self.active_count = self.active_count.saturating_sub(1);
        if self.idle.len() < self.max_size {
            self.idle.push(value);
        }
    }

    /// Shrink (or grow) the idle capacity, trimming excess immediately.
    pub fn resize(&mut self, new_max: usize) {
        self.max_size = new_max;
        self.idle.truncate(new_max);
    }

    pub fn stats(&self) -> PoolStats {
        let gets = self.total_created + self.total_reused;
        PoolStats {
            pool_size: self.idle.len(),
            active_count: self.active_count,
            total_created: self.total_created,
            total_reused: self.total_reused,
            reuse_ratio: if gets == 0 {
                0.0
            } else {
                self.total_reused as f64 / gets as f64
            },
        }
    }

    /// A pool is pulling its weight once most gets are reuses
    pub fn is_healthy(&self) -> bool {
        self.stats().reuse_ratio > 0.5
    }
}

/// Name -> pool mapping. Unknown names are a logged no-op, never an error;
/// callers are expected to check the `Option`.
#[derive(Default)]
pub struct PoolRegistry<T> {
    pools: HashMap<&'static str, ObjectPool<T>>,
}

impl<T> PoolRegistry<T> {
    pub fn new() -> Self {
        Self {
            pools: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &'static str, pool: ObjectPool<T>) {
        if self.pools.insert(name, pool).is_some() {
            log::warn!("pool '{}' re-registered, previous pool dropped", name);
        }
    }

    pub fn get(&mut self, name: &str, init: impl FnOnce(&mut T)) -> Option<T> {
        match self.pools.get_mut(name) {
            Some(pool) => Some(pool.get(init)),
            None => {
                log::debug!("get from unknown pool '{}'", name);
                None
            }
        }
    }

    /// Returns false (and drops the value) when the pool name is unknown.
    pub fn release(&mut self, name: &str, value: T) -> bool {
        match self.pools.get_mut(name) {
            Some(pool) => {
                pool.release(value);
                true
            }
            None => {
                log::debug!("release to unknown pool '{}'", name);
                false
            }
        }
    }

    pub fn stats(&self, name: &str) -> Option<PoolStats> {
        self.pools.get(name).map(|p| p.stats())
    }

    pub fn resize(&mut self, name: &str, new_max: usize) {
        if let Some(pool) = self.pools.get_mut(name) {
            pool.resize(new_max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_pool(max: usize) -> ObjectPool<u32> {
        ObjectPool::new(max, || 0u32)
    }

    #[test]
    fn test_active_count_tracks_outstanding_gets() {
        let mut pool = counter_pool(8);
        let values: Vec<u32> = (0..5).map(|i| pool.get(|v| *v = i)).collect();
        assert_eq!(pool.stats().active_count, 5);
        assert_eq!(pool.stats().total_created, 5);

        for v in values {
            pool.release(v);
        }
        assert_eq!(pool.stats().active_count, 0);
        assert_eq!(pool.stats().pool_size, 5);
    }

    #[test]
    fn test_get_reuses_after_release() {
        let mut pool = counter_pool(8);
        let v = pool.get(|v| *v = 7);
        pool.release(v);

        let reused = pool.get(|v| *v += 1);
        // Reinit ran against the recycled value
        assert_eq!(reused, 8);
        let stats = pool.stats();
        assert_eq!(stats.total_created, 1);
        assert_eq!(stats.total_reused, 1);
        assert_eq!(stats.reuse_ratio, 0.5);
    }

    #[test]
    fn test_release_over_capacity_drops() {
        let mut pool = counter_pool(2);
        let values: Vec<u32> = (0..4).map(|_| pool.get(|_| {})).collect();
        for v in values {
            pool.release(v);
        }
        assert_eq!(pool.stats().pool_size, 2);
    }

    #[test]
    fn test_resize_trims_idle() {
        let mut pool = counter_pool(4);
        let values: Vec<u32> = (0..4).map(|_| pool.get(|_| {})).collect();
        for v in values {
            pool.release(v);
        }
        pool.resize(1);
        assert_eq!(pool.stats().pool_size, 1);
    }

    #[test]
    fn test_health_requires_majority_reuse() {
        let mut pool = counter_pool(8);
        let v = pool.get(|_| {});
        assert!(!pool.is_healthy());
        pool.release(v);
        let a = pool.get(|_| {});
        pool.release(a);
        let b = pool.get(|_| {});
        pool.release(b);
        // 2 reuses out of 3 gets
        assert!(pool.is_healthy());
    }

    #[test]
    fn test_registry_unknown_name_is_noop() {
        let mut reg: PoolRegistry<u32> = PoolRegistry::new();
        reg.register("particles", counter_pool(4));

        assert!(reg.get("nope", |_| {}).is_none());
        assert!(!reg.release("nope", 1));
        assert!(reg.stats("nope").is_none());

        assert!(reg.get("particles", |v| *v = 3).is_some());
        assert_eq!(reg.stats("particles").unwrap().active_count, 1);
    }
}
