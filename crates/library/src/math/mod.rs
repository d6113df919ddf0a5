pub mod bounds;
pub mod casting;
pub mod safe_math;
