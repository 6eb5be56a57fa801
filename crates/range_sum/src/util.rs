use crate::RangeSumError;

#[inline(always)]
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<(), RangeSumError> {
    if start > end || end >= len {
        return Err(RangeSumError::InvalidRange { start, end, len });
    }
    Ok(())
}

#[inline(always)]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), RangeSumError> {
    if index >= len {
        return Err(RangeSumError::IndexOutOfRange { index, len });
    }
    Ok(())
}
