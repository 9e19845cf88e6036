#![cfg(loom)]

use loom::thread;

use bitmask_iter::BitMask;
use std::sync::Arc;

// The mask is immutable and every handle is a private copy, so these models only check that
// handles advance independently of each other. There is no shared state to race on.

#[test]
fn iterate_shared_mask_in_two_threads() {
    loom::model(|| {
        let mask = Arc::new(BitMask::new(0x13u8));

        let mask2 = Arc::clone(&mask);
        let thread = thread::spawn(move || {
            let mut iter = mask2.begin();
            assert_eq!(iter.advance_post().current(), 0);
            thread::yield_now();
            assert_eq!(iter.advance_post().current(), 1);
            assert_eq!(iter.advance_post().current(), 4);
            assert_eq!(iter, mask2.end());
        });
        let positions: Vec<u32> = mask.iter().collect();
        assert_eq!(positions, [0, 1, 4]);
        thread.join().unwrap();
        assert_eq!(mask.begin().current(), 0);
    });
}

#[test]
fn copies_advance_independently() {
    loom::model(|| {
        let mut iter = BitMask::with_start(0xF0u8, 5).begin();
        let copy = iter;
        let thread = thread::spawn(move || {
            let mut copy = copy;
            copy.advance().advance().advance();
            copy.current()
        });
        iter.advance();
        assert_eq!(iter.current(), 6);
        assert_eq!(thread.join().unwrap(), 8);
    });
}
