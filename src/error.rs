//! Container operation errors
//!
//! 容器操作错误

/// A push was refused because the container is at capacity
///
/// 容器已满，推送被拒绝
///
/// Carries the rejected element so the caller keeps ownership of it.
///
/// 携带被拒绝的元素，调用者保留其所有权。
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("container is at capacity")]
pub struct CapacityError<T> {
    /// The element that could not be stored
    ///
    /// 未能存入的元素
    pub element: T,
}

impl<T> CapacityError<T> {
    #[inline]
    pub const fn new(element: T) -> Self {
        Self { element }
    }

    /// Take back the rejected element
    ///
    /// 取回被拒绝的元素
    #[inline]
    pub fn into_inner(self) -> T {
        self.element
    }
}
