use crate::queue::Queue;

/// The string boundary of the queue.
///
/// Values cross the boundary as borrowed text on insertion and are copied
/// into an owned, exactly-sized allocation; the queue never retains the
/// caller's buffer. On removal the owned value is handed back, and the
/// caller may additionally supply a fixed-capacity byte buffer to receive
/// a NUL-terminated copy.
impl Queue<Box<str>> {
    /// Copies `value` into a new owned element and inserts it at the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_head("world");
    /// queue.insert_head("hello");
    /// assert_eq!(queue.front().map(|v| &**v), Some("hello"));
    /// ```
    pub fn insert_head(&mut self, value: &str) {
        self.push_front(value.into());
    }

    /// Copies `value` into a new owned element and inserts it at the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("hello");
    /// queue.insert_tail("world");
    /// assert_eq!(queue.back().map(|v| &**v), Some("world"));
    /// ```
    pub fn insert_tail(&mut self, value: &str) {
        self.push_back(value.into());
    }

    /// Removes the head element and returns its value, or `None` if the
    /// queue is empty.
    ///
    /// If `out` is supplied, it is zero-filled first and then receives at
    /// most `out.len() - 1` bytes of the value, so the buffer is always
    /// NUL-terminated and unused trailing bytes are never stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("dolphin");
    ///
    /// let mut buf = [0xffu8; 4];
    /// let removed = queue.remove_head(Some(&mut buf));
    /// assert_eq!(removed.as_deref(), Some("dolphin"));
    /// assert_eq!(&buf, b"dol\0");
    /// ```
    pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> Option<Box<str>> {
        let value = self.pop_front()?;
        if let Some(out) = out {
            copy_truncated(&value, out);
        }
        Some(value)
    }

    /// Removes the tail element and returns its value, or `None` if the
    /// queue is empty. The output buffer contract is the same as for
    /// [`remove_head`](Queue::remove_head).
    pub fn remove_tail(&mut self, out: Option<&mut [u8]>) -> Option<Box<str>> {
        let value = self.pop_back()?;
        if let Some(out) = out {
            copy_truncated(&value, out);
        }
        Some(value)
    }
}

/// Zero-fill `out`, then copy at most `out.len() - 1` bytes of `value`
/// into it. The reserved final byte keeps the result NUL-terminated even
/// when the value is truncated.
fn copy_truncated(value: &str, out: &mut [u8]) {
    for byte in out.iter_mut() {
        *byte = 0;
    }
    let len = value.len().min(out.len().saturating_sub(1));
    out[..len].copy_from_slice(&value.as_bytes()[..len]);
}

#[cfg(test)]
mod tests {
    use crate::Queue;

    #[test]
    fn insert_copies_the_text() {
        let mut queue = Queue::new();
        let mut text = String::from("alpha");
        queue.insert_tail(&text);
        text.clear();
        assert_eq!(queue.front().map(|v| &**v), Some("alpha"));
    }

    #[test]
    fn round_trip_head_tail() {
        let mut queue = Queue::new();
        queue.insert_head("b");
        queue.insert_head("a");
        queue.insert_tail("c");

        assert_eq!(queue.remove_head(None).as_deref(), Some("a"));
        assert_eq!(queue.remove_tail(None).as_deref(), Some("c"));
        assert_eq!(queue.remove_head(None).as_deref(), Some("b"));
        assert_eq!(queue.remove_head(None), None);
        assert_eq!(queue.remove_tail(None), None);
    }

    #[test]
    fn insert_tail_then_remove_head_round_trips() {
        let mut queue = Queue::new();
        queue.insert_tail("value");
        let mut buf = [0u8; 16];
        assert_eq!(queue.remove_head(Some(&mut buf)).as_deref(), Some("value"));
        assert_eq!(&buf[..6], b"value\0");
        assert!(buf[6..].iter().all(|&b| b == 0));
        assert!(queue.is_empty());
    }

    #[test]
    fn output_buffer_is_truncated_and_terminated() {
        let mut queue = Queue::new();
        queue.insert_tail("abcdefgh");
        let mut buf = [0xaau8; 4];
        queue.remove_head(Some(&mut buf));
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn output_buffer_is_zero_filled_first() {
        let mut queue = Queue::new();
        queue.insert_tail("xy");
        let mut buf = [0x55u8; 8];
        queue.remove_tail(Some(&mut buf));
        assert_eq!(&buf, b"xy\0\0\0\0\0\0");
    }

    #[test]
    fn zero_capacity_buffer_is_left_untouched() {
        let mut queue = Queue::new();
        queue.insert_tail("abc");
        let mut buf = [0u8; 0];
        assert_eq!(queue.remove_head(Some(&mut buf)).as_deref(), Some("abc"));
    }

    #[test]
    fn remove_on_empty_leaves_buffer_alone() {
        let mut queue: Queue<Box<str>> = Queue::new();
        let mut buf = [0x77u8; 4];
        assert_eq!(queue.remove_head(Some(&mut buf)), None);
        assert_eq!(buf, [0x77u8; 4]);
    }
}
