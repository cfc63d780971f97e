/// Sort direction of one ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

/// One key of an order specification. Sequence position determines tie-break
/// precedence: the first key is the primary sort, later keys break ties left
/// to right.
#[derive(Debug, Clone, Copy)]
pub struct Ordered<E> {
    pub order: Order,
    pub expression: E,
}
