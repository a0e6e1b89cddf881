#[repr(i32)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    NoResources = -3,
    NoMemory = -4,
    InvalidArgs = -5,
    BadState = -7,
}

pub type AllocResult<T = ()> = Result<T, AllocError>;
