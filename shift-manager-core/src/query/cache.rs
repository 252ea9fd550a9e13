//! 按键去重的查询缓存
//!
//! 每个键同一时刻最多只有一个在途请求，后来的调用者加入同一个 `Shared` future。
//! 成功结果缓存到 `invalidate` 为止；失败结果只记录状态，下一次 `fetch` 会重新请求。
//!
//! 取消：每次 `fetch` 都带一个与调用方挂载周期绑定的 `CancellationToken`。
//! 被取消的调用方立即返回 `CoreError::Cancelled`；在途请求的最后一个等待者离开时，
//! 请求被中止，键回到未请求状态。

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::{AbortHandle, Abortable, Aborted, BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use super::{QueryKey, QueryState};
use crate::error::{CoreError, CoreResult};

type SharedFetch<T> = Shared<BoxFuture<'static, CoreResult<Arc<T>>>>;

enum Slot<T> {
    Loading {
        generation: u64,
        fetch: SharedFetch<T>,
        abort: AbortHandle,
        waiters: usize,
    },
    Ready {
        data: Arc<T>,
    },
    Failed {
        error: CoreError,
    },
}

/// 查询缓存（每种资源类型一个实例）
pub struct QueryCache<T> {
    slots: Mutex<HashMap<QueryKey, Slot<T>>>,
    next_generation: AtomicU64,
}

impl<T> QueryCache<T>
where
    T: Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            next_generation: AtomicU64::new(1),
        }
    }

    /// 当前快照：未请求与在途都算 `Pending`
    pub fn state(&self, key: &QueryKey) -> QueryState<T> {
        match self.slots.lock().get(key) {
            None | Some(Slot::Loading { .. }) => QueryState::Pending,
            Some(Slot::Ready { data }) => QueryState::Success(Arc::clone(data)),
            Some(Slot::Failed { error }) => QueryState::Error(error.clone()),
        }
    }

    /// 是否有在途请求
    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        matches!(self.slots.lock().get(key), Some(Slot::Loading { .. }))
    }

    /// 拉取资源
    ///
    /// `fetcher` 只在需要发起新请求时被调用。
    pub async fn fetch<F, Fut>(
        &self,
        key: QueryKey,
        cancel: &CancellationToken,
        fetcher: F,
    ) -> CoreResult<Arc<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = CoreResult<T>> + Send + 'static,
    {
        if cancel.is_cancelled() {
            return Err(CoreError::Cancelled);
        }

        let (generation, fetch) = {
            let mut slots = self.slots.lock();
            match slots.get_mut(&key) {
                Some(Slot::Ready { data }) => {
                    log::debug!("query {key}: cache hit");
                    return Ok(Arc::clone(data));
                }
                Some(Slot::Loading {
                    generation,
                    fetch,
                    waiters,
                    ..
                }) => {
                    *waiters += 1;
                    log::debug!("query {key}: joining in-flight request ({waiters} waiters)");
                    (*generation, fetch.clone())
                }
                _ => {
                    let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
                    let (abort, registration) = AbortHandle::new_pair();
                    let fetch = Abortable::new(fetcher(), registration)
                        .map(|outcome| match outcome {
                            Ok(result) => result.map(Arc::new),
                            Err(Aborted) => Err(CoreError::Cancelled),
                        })
                        .boxed()
                        .shared();
                    log::debug!("query {key}: starting request #{generation}");
                    slots.insert(
                        key.clone(),
                        Slot::Loading {
                            generation,
                            fetch: fetch.clone(),
                            abort,
                            waiters: 1,
                        },
                    );
                    (generation, fetch)
                }
            }
        };

        let mut waiter = Waiter {
            cache: self,
            key: &key,
            generation,
            settled: false,
        };

        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(CoreError::Cancelled),
            result = fetch => {
                waiter.settled = true;
                self.settle(&key, generation, &result);
                result
            }
        }
    }

    /// 丢弃已结束的缓存结果；在途请求不受影响
    pub fn invalidate(&self, key: &QueryKey) {
        let mut slots = self.slots.lock();
        if !matches!(slots.get(key), Some(Slot::Loading { .. })) && slots.remove(key).is_some() {
            log::debug!("query {key}: invalidated");
        }
    }

    /// 丢弃所有已结束的缓存结果
    pub fn clear(&self) {
        self.slots
            .lock()
            .retain(|_, slot| matches!(slot, Slot::Loading { .. }));
    }

    /// 在途请求结束：第一个拿到结果的等待者写入结果，其余为空操作
    fn settle(&self, key: &QueryKey, generation: u64, result: &CoreResult<Arc<T>>) {
        let mut slots = self.slots.lock();
        let current = matches!(
            slots.get(key),
            Some(Slot::Loading { generation: g, .. }) if *g == generation
        );
        if !current {
            return;
        }

        match result {
            Ok(data) => {
                slots.insert(
                    key.clone(),
                    Slot::Ready {
                        data: Arc::clone(data),
                    },
                );
            }
            Err(CoreError::Cancelled) => {
                slots.remove(key);
            }
            Err(error) => {
                log::debug!("query {key}: request #{generation} failed: {error}");
                slots.insert(
                    key.clone(),
                    Slot::Failed {
                        error: error.clone(),
                    },
                );
            }
        }
    }

    /// 等待者离开；最后一个离开时中止请求
    fn leave(&self, key: &QueryKey, generation: u64) {
        let mut slots = self.slots.lock();
        let abandoned = match slots.get_mut(key) {
            Some(Slot::Loading {
                generation: g,
                waiters,
                abort,
                ..
            }) if *g == generation => {
                *waiters = waiters.saturating_sub(1);
                if *waiters == 0 {
                    abort.abort();
                    true
                } else {
                    false
                }
            }
            _ => false,
        };

        if abandoned {
            slots.remove(key);
            log::debug!("query {key}: request #{generation} abandoned by all waiters");
        }
    }
}

impl<T> Default for QueryCache<T>
where
    T: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// 在等待者的 future 被取消或丢弃时登记离开
struct Waiter<'a, T>
where
    T: Send + Sync + 'static,
{
    cache: &'a QueryCache<T>,
    key: &'a QueryKey,
    generation: u64,
    settled: bool,
}

impl<T> Drop for Waiter<'_, T>
where
    T: Send + Sync + 'static,
{
    fn drop(&mut self) {
        if !self.settled {
            self.cache.leave(self.key, self.generation);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use tokio::sync::oneshot;

    use super::*;

    fn key(id: i64) -> QueryKey {
        QueryKey::new("schedule-template").with(id)
    }

    #[tokio::test]
    async fn concurrent_fetches_share_one_request() {
        let cache = QueryCache::<String>::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel::<()>();
        let token = CancellationToken::new();

        let first = {
            let calls = calls.clone();
            cache.fetch(key(1), &token, move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                let _ = rx.await;
                Ok("template".to_string())
            })
        };
        let second = {
            let calls = calls.clone();
            cache.fetch(key(1), &token, move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("other".to_string())
            })
        };

        let release = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            let _ = tx.send(());
        };
        let (a, b, ()) = tokio::join!(first, second, release);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.unwrap().as_str(), "template");
        assert_eq!(b.unwrap().as_str(), "template");
    }

    #[tokio::test]
    async fn success_is_cached_until_invalidated() {
        let cache = QueryCache::<usize>::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let token = CancellationToken::new();

        for _ in 0..2 {
            let calls = calls.clone();
            let value = cache
                .fetch(key(1), &token, move || async move {
                    Ok(calls.fetch_add(1, Ordering::SeqCst))
                })
                .await
                .unwrap();
            assert_eq!(*value, 0);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(cache.state(&key(1)), QueryState::Success(_)));

        cache.invalidate(&key(1));
        assert!(cache.state(&key(1)).is_pending());

        let calls2 = calls.clone();
        let value = cache
            .fetch(key(1), &token, move || async move {
                Ok(calls2.fetch_add(1, Ordering::SeqCst))
            })
            .await
            .unwrap();
        assert_eq!(*value, 1);
    }

    #[tokio::test]
    async fn failure_is_reported_then_refetched() {
        let cache = QueryCache::<u32>::new();
        let token = CancellationToken::new();

        let err = cache
            .fetch(key(2), &token, || async {
                Err(CoreError::Network("connection refused".into()))
            })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::Network("connection refused".into()));

        let state = cache.state(&key(2));
        assert_eq!(state.error(), Some(&err));
        assert!(state.data().is_none());

        let value = cache
            .fetch(key(2), &token, || async { Ok(7) })
            .await
            .unwrap();
        assert_eq!(*value, 7);
    }

    #[tokio::test]
    async fn unknown_key_is_pending() {
        let cache = QueryCache::<u32>::new();
        assert!(cache.state(&key(9)).is_pending());
        assert!(!cache.is_fetching(&key(9)));
    }

    #[tokio::test]
    async fn cancelling_the_only_waiter_aborts_the_request() {
        let cache = Arc::new(QueryCache::<u32>::new());
        let token = CancellationToken::new();
        let finished = Arc::new(AtomicUsize::new(0));

        let task = {
            let cache = cache.clone();
            let token = token.clone();
            let finished = finished.clone();
            tokio::spawn(async move {
                cache
                    .fetch(key(3), &token, move || async move {
                        tokio::time::sleep(Duration::from_secs(30)).await;
                        finished.fetch_add(1, Ordering::SeqCst);
                        Ok(1)
                    })
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(cache.is_fetching(&key(3)));

        token.cancel();
        let result = task.await.unwrap();
        assert_eq!(result.unwrap_err(), CoreError::Cancelled);
        assert!(!cache.is_fetching(&key(3)));
        assert!(cache.state(&key(3)).is_pending());
        assert_eq!(finished.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn cancelling_one_waiter_keeps_the_request_for_others() {
        let cache = Arc::new(QueryCache::<u32>::new());
        let (tx, rx) = oneshot::channel::<()>();
        let leaving = CancellationToken::new();
        let staying = CancellationToken::new();

        let first = {
            let cache = cache.clone();
            let leaving = leaving.clone();
            tokio::spawn(async move {
                cache
                    .fetch(key(4), &leaving, move || async move {
                        let _ = rx.await;
                        Ok(5)
                    })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        let second = {
            let cache = cache.clone();
            let staying = staying.clone();
            tokio::spawn(async move {
                cache
                    .fetch(key(4), &staying, || async { Ok(99) })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        leaving.cancel();
        assert_eq!(first.await.unwrap().unwrap_err(), CoreError::Cancelled);
        assert!(cache.is_fetching(&key(4)));

        let _ = tx.send(());
        assert_eq!(*second.await.unwrap().unwrap(), 5);
        assert!(matches!(cache.state(&key(4)), QueryState::Success(_)));
    }

    #[tokio::test]
    async fn already_cancelled_token_never_calls_fetcher() {
        let cache = QueryCache::<u32>::new();
        let token = CancellationToken::new();
        token.cancel();

        let called = Arc::new(AtomicUsize::new(0));
        let c = called.clone();
        let result = cache
            .fetch(key(5), &token, move || async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok(1)
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::Cancelled);
        assert_eq!(called.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn clear_drops_settled_entries() {
        let cache = QueryCache::<u32>::new();
        let token = CancellationToken::new();
        cache.fetch(key(1), &token, || async { Ok(1) }).await.unwrap();
        let _ = cache
            .fetch(key(2), &token, || async { Err(CoreError::Parse("x".into())) })
            .await;

        cache.clear();
        assert!(cache.state(&key(1)).is_pending());
        assert!(cache.state(&key(2)).is_pending());
    }
}
