use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_merge_is_order_independent() {
    let a = Span::new(0, 4);
    let b = Span::new(9, 12);
    assert_eq!(a.merge(b), b.merge(a));
}

#[test]
fn test_span_point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.start, 7);
}

#[test]
fn test_span_try_from_range_start_too_large() {
    let large_start = u32::MAX as usize + 1;
    let result = Span::try_from_range(large_start..large_start + 10);
    assert!(matches!(result, Err(SpanError::StartTooLarge(_))));
}

#[test]
fn test_span_try_from_range_end_too_large() {
    let large_end = u32::MAX as usize + 1;
    let result = Span::try_from_range(0..large_end);
    assert!(matches!(result, Err(SpanError::EndTooLarge(_))));
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(3, 9).to_string(), "3..9");
}
