/// Operations shared by the id-keyed trees in this crate.
pub trait TreeOps {
    fn insert(&mut self, id: i32, information: String) -> bool;
    fn contains(&self, id: i32) -> bool;
    fn remove(&mut self, id: i32) -> bool;
    fn len(&self) -> usize;
}
