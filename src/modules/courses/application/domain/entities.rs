pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_CODE_LEN: usize = 20;

/// Seat accounting for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seats {
    pub capacity: i32,
    pub enrolled: u64,
}

impl Seats {
    pub fn new(capacity: i32, enrolled: u64) -> Self {
        Self { capacity, enrolled }
    }

    pub fn is_full(&self) -> bool {
        self.enrolled >= self.capacity.max(0) as u64
    }

    /// Whether `capacity` still holds everyone already enrolled.
    pub fn fits(capacity: i32, enrolled: u64) -> bool {
        capacity > 0 && capacity as u64 >= enrolled
    }
}
