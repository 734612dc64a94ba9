/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Whole seconds left until `deadline`, rounded up, never negative
pub fn seconds_until(deadline: i64, now: i64) -> u64 {
    let remaining_ms = deadline.saturating_sub(now);
    if remaining_ms <= 0 {
        return 0;
    }
    (remaining_ms as u64).div_ceil(1000)
}
