
use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times values created from it are dropped
///
/// 统计由其创建的值被 drop 的次数
#[derive(Debug)]
pub(crate) struct DropCounter {
    pub(crate) id: u32,
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub(crate) fn new(id: u32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
