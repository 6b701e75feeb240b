//! # Fixed-Capacity Ring Buffer and Bounded Queue
//!
//! 固定容量环形缓冲区与有界队列
//!
//! `fixring` provides two allocation-free sequence containers for embedded and
//! resource-constrained targets. Capacity is a const generic and all storage
//! lives inline in the container.
//!
//! `fixring` 为嵌入式和资源受限的目标提供两种无分配的序列容器。
//! 容量是常量泛型参数，所有存储都内联在容器中。
//!
//! ## Features
//!
//! 特性
//!
//! - **`no_std`, no allocation** - Storage is a fixed array embedded in the value
//! - **Overwrite on full** - [`RingBuffer::push`] evicts the oldest element and hands it back
//! - **Compile-time queue mode** - [`BoundedQueue`] chooses at the type level whether
//!   `push` or `pop` is the O(1) side
//! - **Never fails silently** - Empty pops return `None`, a full queue hands the
//!   rejected element back in [`CapacityError`]
//!
//! - **`no_std`，无分配** - 存储是嵌入在值中的固定数组
//! - **满时覆盖** - [`RingBuffer::push`] 淘汰最旧的元素并将其返回
//! - **编译期队列模式** - [`BoundedQueue`] 在类型层面选择 `push` 或 `pop` 为 O(1) 的一侧
//! - **不会静默失败** - 空弹出返回 `None`，满队列在 [`CapacityError`] 中返回被拒绝的元素
//!
//! ## Ring Buffer
//!
//! 环形缓冲区
//!
//! ```rust
//! use fixring::RingBuffer;
//!
//! let mut buf: RingBuffer<i32, 2> = RingBuffer::new();
//! buf.push(5);
//! buf.push(92);
//!
//! // Full: the oldest element is evicted
//! // 已满：最旧的元素被淘汰
//! assert_eq!(buf.push(18), Some(5));
//! assert_eq!(buf.len(), 2);
//!
//! // Logical index 0 is always the oldest live element
//! // 逻辑索引 0 始终是最旧的存活元素
//! assert_eq!(buf[0], 92);
//! assert_eq!(buf[1], 18);
//!
//! // Remove from either end
//! // 从任意一端移除
//! assert_eq!(buf.pop_back(), Some(18));
//! assert_eq!(buf.pop_front(), Some(92));
//! assert_eq!(buf.pop_front(), None);
//! ```
//!
//! ## Bounded Queue
//!
//! 有界队列
//!
//! ```rust
//! use fixring::{BoundedQueue, QueueOptimization, ReadOptimized, WriteOptimized};
//!
//! // Cheap push, pop shifts
//! // push 廉价，pop 需要移动
//! let mut writes: BoundedQueue<i32, 16, WriteOptimized> = BoundedQueue::new();
//! // Cheap pop, push shifts
//! // pop 廉价，push 需要移动
//! let mut reads: BoundedQueue<i32, 16, ReadOptimized> = BoundedQueue::new();
//!
//! for value in [12, 24] {
//!     writes.push(value).unwrap();
//!     reads.push(value).unwrap();
//! }
//!
//! // Same logical order in both modes
//! // 两种模式的逻辑顺序相同
//! assert_eq!(writes.front(), Some(&12));
//! assert_eq!(reads.front(), Some(&12));
//! assert_eq!(writes.back(), Some(&24));
//! assert_eq!(reads.back(), Some(&24));
//!
//! assert_eq!(reads.optimized_for(), QueueOptimization::Read);
//! ```
//!
//! ## Boundary Behavior
//!
//! 边界行为
//!
//! | Operation | Outcome |
//! |-----------|---------|
//! | `RingBuffer::push` while full | oldest element evicted, returned as `Some` |
//! | `RingBuffer::pop_front` / `pop_back` while empty | `None`, state untouched |
//! | `BoundedQueue::push` while full | `Err(CapacityError)`, queue untouched |
//! | `BoundedQueue::pop` while empty | no-op |
//! | `RingBuffer[i]` with `i >= len()` | panic, use `get` for a checked read |
//!
//! ## Cargo Features
//!
//! - `tracing` - emit `trace`-level events (eviction, rejected push, empty pop)
//!   through the `tracing` crate
//! - `loom` - enable the loom model tests
//!
//! ## Notes
//!
//! 注意事项
//!
//! - Neither container is internally synchronized. Both are `Send`/`Sync` when
//!   `T` is, so a container can be moved to another thread; sharing one needs
//!   external locking
//! - A `RingBuffer` with `N == 0` fails to compile
//!
//! - 两种容器都没有内部同步。当 `T` 满足时它们是 `Send`/`Sync`，可以移动到其他线程；共享需要外部加锁
//! - `N == 0` 的 `RingBuffer` 无法编译

#![no_std]

#[cfg(test)]
extern crate std;

pub mod error;
pub mod mode;
pub mod queue;
pub mod ring;
mod cursor;
mod shim;
mod slots;

#[cfg(test)]
mod tests;

pub use error::CapacityError;
pub use mode::{Optimization, QueueOptimization, ReadOptimized, WriteOptimized};
pub use queue::BoundedQueue;
pub use ring::RingBuffer;
