#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}
