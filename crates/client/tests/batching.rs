mod helpers;

use helpers::{payloads, FakeSink};
use hubcast::{BatchPacker, EventPayload, HubError, PackReport, PackingPolicy, TransportError};
use std::num::NonZeroUsize;

fn fixed_count(count: usize) -> PackingPolicy {
    PackingPolicy::fixed_count(NonZeroUsize::new(count).unwrap())
}

#[tokio::test]
async fn flushes_full_batch_and_continues() {
    let sink = FakeSink::with_max_events(2);
    let packer = BatchPacker::new(&sink, PackingPolicy::Bounded);

    let report = packer.pack(payloads(&["a", "b", "c"])).await.unwrap();

    assert_eq!(sink.sent_payloads(), vec![vec!["a", "b"], vec!["c"]]);
    assert_eq!(report, PackReport { batches: 2, events: 3 });
}

#[tokio::test]
async fn empty_input_sends_nothing() {
    let sink = FakeSink::with_max_bytes(16);

    let report = BatchPacker::new(&sink, PackingPolicy::Bounded)
        .pack(Vec::new())
        .await
        .unwrap();

    assert!(sink.sent().is_empty());
    assert_eq!(report, PackReport::default());

    let report = BatchPacker::new(&sink, fixed_count(3))
        .pack(Vec::new())
        .await
        .unwrap();

    assert!(sink.sent().is_empty());
    assert_eq!(report.batches, 0);
}

#[tokio::test]
async fn preserves_order_without_loss_or_duplication() {
    let sink = FakeSink::with_max_bytes(10);
    let input: Vec<String> = (0..50).map(|i| format!("event-{i}")).collect();
    let texts: Vec<&str> = input.iter().map(String::as_str).collect();

    let report = BatchPacker::new(&sink, PackingPolicy::Bounded)
        .pack(payloads(&texts))
        .await
        .unwrap();

    let sent: Vec<String> = sink.sent_payloads().into_iter().flatten().collect();
    assert_eq!(sent, input);
    assert_eq!(report.events, input.len());
    assert_eq!(report.batches, sink.sent().len());
}

#[tokio::test]
async fn never_exceeds_byte_bound() {
    let sink = FakeSink::with_max_bytes(12);
    let texts = ["alpha", "be", "gamma", "d", "epsilon", "zeta", "eta", "theta", "iota"];

    BatchPacker::new(&sink, PackingPolicy::Bounded)
        .pack(payloads(&texts))
        .await
        .unwrap();

    let sent = sink.sent();
    assert!(sent.len() > 1);
    for batch in sent {
        assert!(batch.size_bytes <= 12, "batch too large: {batch:?}");
        assert!(!batch.payloads.is_empty());
    }
}

#[tokio::test]
async fn payload_at_bound_is_sent_alone() {
    let sink = FakeSink::with_max_bytes(4);

    BatchPacker::new(&sink, PackingPolicy::Bounded)
        .pack(payloads(&["ab", "wxyz", "c"]))
        .await
        .unwrap();

    assert_eq!(
        sink.sent_payloads(),
        vec![vec!["ab"], vec!["wxyz"], vec!["c"]]
    );
}

#[tokio::test]
async fn oversized_payload_into_empty_batch_is_too_large() {
    let sink = FakeSink::with_max_bytes(4);

    let error = BatchPacker::new(&sink, PackingPolicy::Bounded)
        .pack(payloads(&["xxxxx"]))
        .await
        .unwrap_err();

    assert!(matches!(error, HubError::PayloadTooLarge(5)));
    assert!(sink.sent().is_empty());
}

#[tokio::test]
async fn oversized_payload_after_flush_is_too_large() {
    let sink = FakeSink::with_max_bytes(4);

    let error = BatchPacker::new(&sink, PackingPolicy::Bounded)
        .pack(payloads(&["ab", "xxxxx", "cd"]))
        .await
        .unwrap_err();

    assert!(matches!(error, HubError::PayloadTooLarge(5)));
    assert_eq!(sink.sent_payloads(), vec![vec!["ab"]]);
}

#[tokio::test]
async fn fixed_count_chunks_input() {
    let sink = FakeSink::with_max_bytes(1024);

    let report = BatchPacker::new(&sink, fixed_count(2))
        .pack(payloads(&["a", "b", "c", "d", "e"]))
        .await
        .unwrap();

    let sizes: Vec<usize> = sink.sent().iter().map(|b| b.payloads.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);
    assert_eq!(report, PackReport { batches: 3, events: 5 });
}

#[tokio::test]
async fn fixed_count_sends_ceil_of_input_over_limit() {
    for (limit, total) in [(3_usize, 9_usize), (3, 10), (4, 5), (7, 50)] {
        let sink = FakeSink::with_max_bytes(1024);
        let input: Vec<EventPayload> = (0..total).map(|i| EventPayload::from(i.to_string())).collect();

        BatchPacker::new(&sink, fixed_count(limit))
            .pack(input)
            .await
            .unwrap();

        let sizes: Vec<usize> = sink.sent().iter().map(|b| b.payloads.len()).collect();
        let expected_last = if total % limit == 0 { limit } else { total % limit };

        assert_eq!(sizes.len(), total.div_ceil(limit), "limit {limit}, total {total}");
        assert!(sizes[..sizes.len() - 1].iter().all(|&size| size == limit));
        assert_eq!(sizes.last(), Some(&expected_last));
    }
}

#[tokio::test]
async fn fixed_count_still_honours_byte_bound() {
    let sink = FakeSink::with_max_bytes(4);

    BatchPacker::new(&sink, fixed_count(3))
        .pack(payloads(&["aa", "bb", "cc", "d"]))
        .await
        .unwrap();

    assert_eq!(
        sink.sent_payloads(),
        vec![vec!["aa", "bb"], vec!["cc"], vec!["d"]]
    );
}

#[tokio::test]
async fn fixed_count_oversized_payload_mid_chunk_is_too_large() {
    let sink = FakeSink::with_max_bytes(4);

    let error = BatchPacker::new(&sink, fixed_count(3))
        .pack(payloads(&["a", "b", "xxxxxx"]))
        .await
        .unwrap_err();

    assert!(matches!(error, HubError::PayloadTooLarge(6)));
    assert_eq!(sink.sent_payloads(), vec![vec!["a", "b"]]);
}

#[tokio::test]
async fn partition_key_applies_to_every_batch() {
    let sink = FakeSink::with_max_events(1);

    BatchPacker::new(&sink, PackingPolicy::Bounded)
        .partition_key(Some("tenant-7"))
        .pack(payloads(&["a", "b"]))
        .await
        .unwrap();

    let keys: Vec<Option<String>> = sink.sent().into_iter().map(|b| b.partition_key).collect();
    assert_eq!(keys, vec![Some("tenant-7".to_owned()), Some("tenant-7".to_owned())]);
}

#[tokio::test]
async fn send_failure_is_propagated_without_retry() {
    let sink = FakeSink::with_max_events(2).failing();

    let error = BatchPacker::new(&sink, PackingPolicy::Bounded)
        .pack(payloads(&["a", "b", "c"]))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        HubError::Transport(TransportError::Send(2, _))
    ));
    assert_eq!(sink.batches_created(), 1);
}
