//! Test fixtures and constants.

/// Stand-in for pass(1).
///
/// `pass show <key>` prints `store/<key>`, or fails like the real tool when
/// the entry is missing. Two probe keys report on how it was invoked.
pub const FAKE_PASS_SCRIPT: &str = r#"#!/bin/sh
store="$(dirname "$0")/../store"
if [ "$1" != "show" ]; then
    echo "fake pass: unsupported command: $1" >&2
    exit 2
fi
case "$2" in
    probe/stdin)
        if read -r line; then echo "stdin:$line"; else echo "stdin-closed"; fi
        exit 0
        ;;
    probe/args)
        shift
        echo "$#"
        exit 0
        ;;
esac
if [ -f "$store/$2" ]; then
    cat "$store/$2"
else
    echo "Error: $2 is not in the password store." >&2
    exit 1
fi
"#;

/// Multi-line store entry in the usual pass layout.
pub const DB_CREDS_ENTRY: &str = "s3cr3t\nlogin: app\nurl: db.internal\n";

/// Store entry written on Windows-style line endings.
pub const CRLF_ENTRY: &str = "crlf-secret\r\nsecond line\r\n";

/// Password on the first line, binary attachment after it.
pub const BINARY_TAIL_ENTRY: &[u8] = b"s3cr3t\n\x89PNG\r\n\x1a\n\xff\xfe\n";

/// Latin-1 bytes that are not valid UTF-8.
pub const LATIN1_VALUE: &[u8] = b"caf\xe9";
