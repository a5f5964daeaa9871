/// 一个真实节点。label在同一个selector/ring内唯一；data由调用方持有，算法不做解释。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T = ()> {
    label: String,
    data: T,
    weight: u32,
}

impl<T> Node<T> {
    pub fn new(label: impl Into<String>, data: T, weight: u32) -> Self {
        Self {
            label: label.into(),
            data,
            weight,
        }
    }
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }
    pub fn into_data(self) -> T {
        self.data
    }
}

// 默认权重为1
impl From<&str> for Node {
    #[inline]
    fn from(label: &str) -> Self {
        Self::new(label, (), 1)
    }
}
impl From<String> for Node {
    #[inline]
    fn from(label: String) -> Self {
        Self::new(label, (), 1)
    }
}
impl From<&String> for Node {
    #[inline]
    fn from(label: &String) -> Self {
        Self::new(label.as_str(), (), 1)
    }
}

/// 成员变更操作，配合ds::cow在快照副本上执行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership<T = ()> {
    Add(Node<T>),
    Remove(String),
}
