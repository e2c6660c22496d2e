//! Table definition and seed rows for the `snippets` table.

/// Idempotent table creation statement.
///
/// `created_at` carries a storage-level default, but inserts always bind an
/// explicit timestamp so the stored format stays uniform (RFC 3339).
pub(crate) const SNIPPETS_DDL: &str = "
    CREATE TABLE IF NOT EXISTS snippets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        language TEXT NOT NULL,
        description TEXT NOT NULL,
        code TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
";

/// Connection pragmas applied at bootstrap. WAL keeps concurrent readers
/// from blocking the writer.
pub(crate) const BOOTSTRAP_PRAGMAS: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
";

/// Example rows inserted exactly once, when the table is empty:
/// (title, language, description, code).
pub(crate) const SEED_SNIPPETS: [(&str, &str, &str, &str); 2] = [
    (
        "Python Flask API",
        "Python",
        "A minimal Flask API.",
        "from flask import Flask\napp = Flask(__name__)\n\n@app.route(\"/\")\ndef hello():\n    return \"Hello!\"",
    ),
    (
        "CSS Flexbox Center",
        "CSS",
        "Center a div with Flexbox.",
        ".parent{\n display: flex;\n justify-content: center;\n align-items: center;\n}",
    ),
];
