#[cfg(test)]
mod tests {
    use crate::http::fetch::timer_millis;
    use crate::http::FetchHttp;
    use flowchat_core::ports::HttpPort;

    #[test]
    fn test_timer_millis_passes_small_values() {
        assert_eq!(timer_millis(30_000), 30_000);
        assert_eq!(timer_millis(0), 0);
    }

    #[test]
    fn test_timer_millis_saturates() {
        assert_eq!(timer_millis(u64::MAX), u32::MAX);
        assert_eq!(timer_millis(u32::MAX as u64 + 1), u32::MAX);
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(FetchHttp::new().backend_name(), "fetch");
    }
}
