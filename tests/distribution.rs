use std::collections::HashSet;
use std::thread;

use sharng::distribution::{
    ChannelParams, ChannelState, DistributionError, Distributor, SafeRandom, SharedSource,
};
use sharng::rng::ShaRing;

/// The first `count` values a fresh generator yields for `bits`-bit requests.
fn sequential(seed: u64, bits: usize, count: usize) -> Vec<Vec<u8>> {
    let mut rng = ShaRing::from_seed(seed);

    (0..count).map(|_| rng.next_bits(bits)).collect()
}

fn assert_unique_and_sequential(received: &[Vec<u8>], expected: &[Vec<u8>]) {
    let unique: HashSet<&Vec<u8>> = received.iter().collect();
    assert_eq!(unique.len(), received.len(), "a value was delivered twice");

    let allowed: HashSet<&Vec<u8>> = expected.iter().collect();
    for value in received {
        assert!(allowed.contains(value), "unexpected value {:02x?}", value);
    }
}

#[test]
fn two_channels_share_one_generator() {
    let source = SharedSource::new(ShaRing::from_seed(2024));
    let mut left = SafeRandom::open(source.clone(), 64).unwrap();
    let mut right = SafeRandom::open(source, 64).unwrap();

    let (a, b) = thread::scope(|scope| {
        let left_rx = left.channel();
        let right_rx = right.channel();

        let a = scope.spawn(move || (0..500).map(|_| left_rx.recv().unwrap()).collect::<Vec<_>>());
        let b = scope.spawn(move || (0..500).map(|_| right_rx.recv().unwrap()).collect::<Vec<_>>());

        (a.join().unwrap(), b.join().unwrap())
    });

    left.close();
    right.close();

    let mut received = a;
    received.extend(b);
    assert_eq!(received.len(), 1000);

    // Each loop holds at most one drawn value that was never delivered.
    assert_unique_and_sequential(&received, &sequential(2024, 64, 1002));
}

#[test]
fn consumers_of_one_channel_partition_values() {
    let source = SharedSource::new(ShaRing::from_seed(7));
    let channel = SafeRandom::open(source, 32).unwrap();

    let received: Vec<Vec<u8>> = thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let rx = channel.channel();
                scope.spawn(move || (0..250).map(|_| rx.recv().unwrap()).collect::<Vec<_>>())
            })
            .collect();

        workers
            .into_iter()
            .flat_map(|worker| worker.join().unwrap())
            .collect()
    });

    assert_eq!(received.len(), 1000);
    assert_unique_and_sequential(&received, &sequential(7, 32, 1001));
}

#[test]
fn single_consumer_sees_generation_order() {
    let source = SharedSource::new(ShaRing::from_seed(11));
    let channel = SafeRandom::open(source, 12).unwrap();
    let rx = channel.channel();

    let received: Vec<Vec<u8>> = (0..100).map(|_| rx.recv().unwrap()).collect();

    assert_eq!(received, sequential(11, 12, 100));
    assert!(received.iter().all(|value| value.len() == 2 && value[1] >> 4 == 0));
}

#[test]
fn closed_channel_reports_disconnection() {
    let source = SharedSource::new(ShaRing::from_seed(1));
    let mut channel = SafeRandom::open(source, 8).unwrap();
    let rx = channel.channel();

    assert!(rx.recv().is_ok());

    channel.close();
    channel.close();

    assert_eq!(channel.state(), ChannelState::Closed);
    assert!(rx.recv().is_err());
}

#[test]
fn dropping_channel_stops_production() {
    let source = SharedSource::new(ShaRing::from_seed(1));
    let rx = SafeRandom::open(source.clone(), 16).unwrap().channel();

    assert!(rx.recv().is_err());

    // The generator is free again once the loop is gone.
    assert_eq!(source.with(|rng| rng.next_bits(8)).len(), 1);
}

#[test]
fn buffered_channel_drains_before_disconnecting() {
    let source = SharedSource::new(ShaRing::from_seed(5));
    let params = ChannelParams::new(64).with_capacity(4).with_thread_name("buffered");
    let mut channel = SafeRandom::open_with(source, params).unwrap();
    let rx = channel.channel();

    assert!(rx.recv().is_ok());
    channel.close();

    let drained: Vec<Vec<u8>> = rx.iter().collect();
    assert!(drained.len() <= 4);
    assert!(rx.recv().is_err());
}

#[test]
fn distributor_keeps_one_channel_per_width() {
    let mut distributor = Distributor::new(ShaRing::from_seed(99));

    let bytes = distributor.channel(8).unwrap();
    let wide = distributor.channel(100).unwrap();
    let bytes_again = distributor.channel(8).unwrap();

    assert_eq!(distributor.widths(), vec![8, 100]);

    for _ in 0..10 {
        assert_eq!(bytes.recv().unwrap().len(), 1);
        assert_eq!(bytes_again.recv().unwrap().len(), 1);

        let value = wide.recv().unwrap();
        assert_eq!(value.len(), 13);
        assert_eq!(value[12] >> 4, 0);
    }

    assert!(distributor.close(8));
    assert!(!distributor.close(8));
    assert!(bytes.recv().is_err());
    assert!(wide.recv().is_ok());

    distributor.close_all();
    assert!(distributor.widths().is_empty());
    assert!(wide.recv().is_err());
}

#[test]
fn distributor_rejects_zero_width() {
    let mut distributor = Distributor::new(ShaRing::from_seed(0)).with_capacity(2);

    assert!(matches!(
        distributor.channel(0),
        Err(DistributionError::ZeroWidth)
    ));
    assert!(distributor.widths().is_empty());
}
