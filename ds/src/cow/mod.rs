//! 提供一写多读的数据结构。
//!
//! 读端拿到的永远是一个完整的快照；写端在副本上修改（或直接构建新值），
//! 完成后原子替换，旧快照在最后一个读者释放后回收。
mod read;
pub use read::*;

mod write;
pub use write::*;

/// 将一个操作作用在T上。失败时T可能已被部分修改，因此写端只在成功时发布。
pub trait Update<O> {
    type Error;
    fn update(&mut self, op: &O) -> Result<(), Self::Error>;
}

pub fn cow<T>(t: T) -> (CowWriteHandle<T>, CowReadHandle<T>) {
    let rx: CowReadHandle<T> = t.into();
    let tx = CowWriteHandle::from(rx.clone());
    (tx, rx)
}
