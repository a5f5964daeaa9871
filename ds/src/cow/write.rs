use super::{CowReadHandle, Update};

/// 唯一的写端，不可clone；所有修改都要求&mut self，写写之间天然互斥。
pub struct CowWriteHandle<T> {
    r_handle: CowReadHandle<T>,
}
impl<T> CowWriteHandle<T> {
    pub(crate) fn from(r_handle: CowReadHandle<T>) -> Self {
        Self { r_handle }
    }
    // 在当前快照的副本上修改，然后发布
    pub fn write<F: FnOnce(&mut T)>(&mut self, f: F)
    where
        T: Clone,
    {
        let mut t: T = self.r_handle.copy();
        f(&mut t);
        self.r_handle.update(t);
    }
    // f返回Err时丢弃副本，读端看到的仍是旧快照
    pub fn try_write<F, E>(&mut self, f: F) -> Result<(), E>
    where
        T: Clone,
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        let mut t: T = self.r_handle.copy();
        f(&mut t)?;
        self.r_handle.update(t);
        Ok(())
    }
    #[inline]
    pub fn apply<O>(&mut self, op: &O) -> Result<(), T::Error>
    where
        T: Clone + Update<O>,
    {
        self.try_write(|t| t.update(op))
    }
    /// 直接替换为一个新构建的值
    #[inline]
    pub fn publish(&mut self, t: T) {
        self.r_handle.update(t);
    }
    #[inline]
    pub fn reader(&self) -> CowReadHandle<T> {
        self.r_handle.clone()
    }
}
