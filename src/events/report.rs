use crate::events::counter::EventCounts;
use std::io::{self, Write};

pub fn write_counts<W: Write>(counts: &EventCounts, mut out: W) -> io::Result<()> {
    for (action, count) in counts.iter() {
        writeln!(out, "{action}: {count}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn one_line_per_action_in_order() {
        let records = vec![
            json!({"action": "b"}),
            json!({"action": "a"}),
            json!({"action": "b"}),
        ];
        let counts = EventCounts::tally(&records, "action");
        let mut buf = Vec::new();
        write_counts(&counts, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a: 1\nb: 2\n");
    }

    #[test]
    fn empty_counts_render_nothing() {
        let mut buf = Vec::new();
        write_counts(&EventCounts::new(), &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
