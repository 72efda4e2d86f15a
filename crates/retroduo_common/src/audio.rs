use std::cell::UnsafeCell;
use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Output sample rate shared by the APU and the host audio device.
pub const SAMPLE_RATE: u32 = 44_100;

/// Ring capacity in stereo frames for `millis` of audio.
pub fn frames_for_millis(millis: u32) -> usize {
    (SAMPLE_RATE as usize * millis as usize) / 1000
}

/// Consumer end of a single-producer / single-consumer ring of stereo `f32`
/// frames. Owned by the host audio callback.
pub struct AudioConsumer {
    inner: Arc<Inner>,
}

/// Producer end, owned by the APU on the emulation thread.
///
/// The ring is lossy when full: the newest frame is dropped.
pub struct AudioProducer {
    inner: Arc<Inner>,
}

struct Inner {
    // One extra slot so head == tail is unambiguously empty.
    buf: Box<[UnsafeCell<MaybeUninit<[f32; 2]>>]>,
    cap: usize,
    head: AtomicUsize,
    tail: AtomicUsize,
}

// Only the producer writes `buf[head]` and only the consumer reads
// `buf[tail]`; the indices are published through the atomics. Each end is
// a single owner: pushing and popping take `&mut self`, so a shared
// reference to one end can never advance its index from two threads.
unsafe impl Sync for Inner {}

impl Inner {
    fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        if head >= tail {
            head - tail
        } else {
            (self.cap - tail) + head
        }
    }

    fn capacity_frames(&self) -> usize {
        self.cap.saturating_sub(1)
    }

    #[inline]
    fn next_index(&self, idx: usize) -> usize {
        let next = idx + 1;
        if next == self.cap {
            0
        } else {
            next
        }
    }
}

pub fn audio_queue(capacity_frames: usize) -> (AudioProducer, AudioConsumer) {
    let cap = capacity_frames.saturating_add(1).max(2);
    let mut v: Vec<UnsafeCell<MaybeUninit<[f32; 2]>>> = Vec::with_capacity(cap);
    for _ in 0..cap {
        v.push(UnsafeCell::new(MaybeUninit::uninit()));
    }

    let inner = Arc::new(Inner {
        buf: v.into_boxed_slice(),
        cap,
        head: AtomicUsize::new(0),
        tail: AtomicUsize::new(0),
    });

    (
        AudioProducer {
            inner: Arc::clone(&inner),
        },
        AudioConsumer { inner },
    )
}

impl AudioProducer {
    #[inline]
    pub fn push_stereo(&mut self, left: f32, right: f32) -> bool {
        let head = self.inner.head.load(Ordering::Relaxed);
        let next = self.inner.next_index(head);
        let tail = self.inner.tail.load(Ordering::Acquire);
        if next == tail {
            return false;
        }

        unsafe {
            (*self.inner.buf[head].get()).write([left, right]);
        }
        self.inner.head.store(next, Ordering::Release);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity_frames(&self) -> usize {
        self.inner.capacity_frames()
    }
}

impl AudioConsumer {
    #[inline]
    pub fn pop_stereo(&mut self) -> Option<(f32, f32)> {
        let tail = self.inner.tail.load(Ordering::Relaxed);
        let head = self.inner.head.load(Ordering::Acquire);
        if tail == head {
            return None;
        }

        let sample = unsafe { (*self.inner.buf[tail].get()).assume_init_read() };
        let next = self.inner.next_index(tail);
        self.inner.tail.store(next, Ordering::Release);
        Some((sample[0], sample[1]))
    }

    /// Fill an interleaved stereo buffer, padding with silence on underrun.
    ///
    /// Returns the number of frames that came from the ring.
    pub fn fill_interleaved(&mut self, out: &mut [f32]) -> usize {
        let mut filled = 0;
        for frame in out.chunks_mut(2) {
            match self.pop_stereo() {
                Some((l, r)) => {
                    frame[0] = l;
                    if let Some(right) = frame.get_mut(1) {
                        *right = r;
                    }
                    filled += 1;
                }
                None => frame.fill(0.0),
            }
        }
        filled
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity_frames(&self) -> usize {
        self.inner.capacity_frames()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_preserve_order() {
        let (mut tx, mut rx) = audio_queue(4);
        assert!(tx.push_stereo(0.1, -0.1));
        assert!(tx.push_stereo(0.2, -0.2));
        assert_eq!(rx.len(), 2);
        assert_eq!(rx.pop_stereo(), Some((0.1, -0.1)));
        assert_eq!(rx.pop_stereo(), Some((0.2, -0.2)));
        assert_eq!(rx.pop_stereo(), None);
    }

    #[test]
    fn full_ring_drops_newest_frame() {
        let (mut tx, mut rx) = audio_queue(2);
        assert!(tx.push_stereo(1.0, 1.0));
        assert!(tx.push_stereo(2.0, 2.0));
        assert!(!tx.push_stereo(3.0, 3.0));
        assert_eq!(tx.len(), 2);
        assert_eq!(rx.pop_stereo(), Some((1.0, 1.0)));
        assert!(tx.push_stereo(4.0, 4.0));
        assert_eq!(rx.pop_stereo(), Some((2.0, 2.0)));
        assert_eq!(rx.pop_stereo(), Some((4.0, 4.0)));
    }

    #[test]
    fn indices_wrap_around_capacity() {
        let (mut tx, mut rx) = audio_queue(3);
        for i in 0..10 {
            assert!(tx.push_stereo(i as f32, 0.0));
            assert_eq!(rx.pop_stereo(), Some((i as f32, 0.0)));
        }
        assert!(rx.is_empty());
    }

    #[test]
    fn fill_pads_underrun_with_silence() {
        let (mut tx, mut rx) = audio_queue(8);
        tx.push_stereo(0.5, 0.25);
        let mut out = [9.0f32; 6];
        assert_eq!(rx.fill_interleaved(&mut out), 1);
        assert_eq!(out, [0.5, 0.25, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn ends_are_send() {
        fn assert_send<T: Send>() {}
        assert_send::<AudioProducer>();
        assert_send::<AudioConsumer>();
    }

    #[test]
    fn each_end_runs_on_its_own_thread() {
        const FRAMES: u32 = 20_000;
        let (mut tx, mut rx) = audio_queue(256);
        let writer = std::thread::spawn(move || {
            let mut i = 0;
            while i < FRAMES {
                if tx.push_stereo(i as f32, -(i as f32)) {
                    i += 1;
                } else {
                    std::thread::yield_now();
                }
            }
        });
        let reader = std::thread::spawn(move || {
            let mut next = 0;
            while next < FRAMES {
                match rx.pop_stereo() {
                    Some((l, r)) => {
                        assert_eq!(l, next as f32);
                        assert_eq!(r, -(next as f32));
                        next += 1;
                    }
                    None => std::thread::yield_now(),
                }
            }
            rx.pop_stereo()
        });
        writer.join().unwrap();
        assert_eq!(reader.join().unwrap(), None);
    }
}
