// Synthetic hands for classifier and engine tests.
#![allow(dead_code)]

use lightree_core::gesture::{
    INDEX_TIP, LANDMARK_COUNT, MIDDLE_MCP, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
};
use lightree_core::{Hand, HandFrame, Landmark};

/// Wrist at `(wx, wy)`, all four fingertips `spread` below it, thumb tip
/// `pinch_gap` to the right of the index tip.
pub fn hand_at(wx: f32, wy: f32, spread: f32, pinch_gap: f32) -> Hand {
    let mut points = [Landmark::new(wx, wy, 0.0); LANDMARK_COUNT];
    let tip = Landmark::new(wx, wy + spread, 0.0);
    for i in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
        points[i] = tip;
    }
    points[THUMB_TIP] = Landmark::new(tip.x + pinch_gap, tip.y, 0.0);
    points[MIDDLE_MCP] = Landmark::new(wx, wy + spread * 0.4, 0.0);
    points[WRIST] = Landmark::new(wx, wy, 0.0);
    Hand::new(points)
}

/// Hand at the origin; distances come out exact for the boundary tests.
pub fn hand(spread: f32, pinch_gap: f32) -> Hand {
    hand_at(0.0, 0.0, spread, pinch_gap)
}

pub fn with_landmark(mut hand: Hand, index: usize, x: f32, y: f32) -> Hand {
    hand.landmarks[index] = Landmark::new(x, y, 0.0);
    hand
}

/// Two hands whose thumb tips are `thumb_gap` apart and index tips `index_gap`.
pub fn two_hands(first: Hand, thumb_gap: f32, index_gap: f32) -> HandFrame {
    let thumb = first.landmarks[THUMB_TIP];
    let index = first.landmarks[INDEX_TIP];
    let mut second = hand_at(0.8, 0.2, 0.3, 0.2);
    second.landmarks[THUMB_TIP] = Landmark::new(thumb.x + thumb_gap, thumb.y, 0.0);
    second.landmarks[INDEX_TIP] = Landmark::new(index.x + index_gap, index.y, 0.0);
    HandFrame::with_hands([first, second])
}

pub fn one_hand(hand: Hand) -> HandFrame {
    HandFrame::with_hands([hand])
}
