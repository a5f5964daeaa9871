use arc_swap::ArcSwap;
use std::sync::Arc;

pub struct CowReadHandle<T> {
    inner: Arc<ArcSwap<T>>,
}

// 只clone外层的Arc，T不需要实现Clone
impl<T> Clone for CowReadHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> From<T> for CowReadHandle<T> {
    fn from(t: T) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(t)),
        }
    }
}

impl<T> CowReadHandle<T> {
    /// 引用只在f内有效，不可保留；f要轻量，长时间持有请用get
    #[inline]
    pub fn do_with<F: FnOnce(&T) -> R, R>(&self, f: F) -> R {
        let guard = self.inner.load();
        f(&**guard)
    }
    #[inline]
    pub fn get(&self) -> Arc<T> {
        self.inner.load_full()
    }
    #[inline]
    pub fn copy(&self) -> T
    where
        T: Clone,
    {
        (**self.inner.load()).clone()
    }
    // 只在WriteHandle中调用
    #[inline]
    pub(super) fn update(&self, t: T) {
        self.inner.store(Arc::new(t));
    }
}
