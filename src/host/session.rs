use std::io::{BufRead, Write};

use super::message::Message;
use crate::error::ClipmockError;

/// Line-framed message channel to the host.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: Vec::new(),
        }
    }

    /// Next decodable frame, or `None` once the host closes the stream.
    ///
    /// Blank lines are skipped. Lines that are not UTF-8 or fail to decode
    /// cannot be answered (there is no msgid to address), so they are logged
    /// and dropped.
    pub fn recv(&mut self) -> Result<Option<Message>, ClipmockError> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }

            let frame = match std::str::from_utf8(&self.line) {
                Ok(frame) => frame.trim(),
                Err(e) => {
                    log::warn!("Dropping non UTF-8 frame ({} bytes): {}", self.line.len(), e);
                    continue;
                }
            };
            if frame.is_empty() {
                continue;
            }

            match Message::decode(frame) {
                Ok(message) => return Ok(Some(message)),
                Err(e) => log::warn!("Dropping frame {:?}: {}", frame, e),
            }
        }
    }

    pub fn send(&mut self, message: &Message) -> Result<(), ClipmockError> {
        writeln!(self.writer, "{}", message.encode())?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_recv_reads_frames_in_order() {
        let mut s = session("[0,1,\"poll\",[]]\n[2,\"note\",[]]\n");
        assert!(matches!(
            s.recv().unwrap(),
            Some(Message::Request { msgid: 1, .. })
        ));
        assert!(matches!(
            s.recv().unwrap(),
            Some(Message::Notification { .. })
        ));
        assert!(s.recv().unwrap().is_none());
    }

    #[test]
    fn test_recv_skips_blank_and_garbage_lines() {
        let mut s = session("\n   \nnot json\n[0,2,\"poll\",[]]");
        assert!(matches!(
            s.recv().unwrap(),
            Some(Message::Request { msgid: 2, .. })
        ));
        assert!(s.recv().unwrap().is_none());
    }

    #[test]
    fn test_recv_skips_invalid_utf8_line() {
        let input = b"[0,1,\"poll\",[]]\n\xff\xfe\n[0,2,\"poll\",[]]\n".to_vec();
        let mut s = Session::new(Cursor::new(input), Vec::new());
        assert!(matches!(
            s.recv().unwrap(),
            Some(Message::Request { msgid: 1, .. })
        ));
        assert!(matches!(
            s.recv().unwrap(),
            Some(Message::Request { msgid: 2, .. })
        ));
        assert!(s.recv().unwrap().is_none());
    }

    #[test]
    fn test_recv_empty_input_is_end_of_stream() {
        let mut s = session("");
        assert!(s.recv().unwrap().is_none());
    }

    #[test]
    fn test_send_writes_one_line_per_frame() {
        let mut s = session("");
        s.send(&Message::success(1, json!("ok"))).unwrap();
        s.send(&Message::failure(2, "boom")).unwrap();

        let out = String::from_utf8(s.into_writer()).unwrap();
        assert_eq!(out, "[1,1,null,\"ok\"]\n[1,2,\"boom\",null]\n");
    }
}
