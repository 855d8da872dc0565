//! Compiled regex patterns for the built-in line grammars.
//!
//! Every pattern is anchored at both ends so the whole line has to fit the
//! grammar; the `regex` crate guarantees matching in time linear in the line.

use std::sync::OnceLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Java / JVM
// ---------------------------------------------------------------------------

/// `[Caused by: |Suppressed: |Exception in thread "x" ]pkg.SomeException[: message]`
///
/// The package is optional only behind one of the prefixes; a bare header
/// needs at least one package segment.
pub(super) fn re_java_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"^\s*(?:(?:Caused by: |Suppressed: |Exception in thread "[^"]*" )(?:[A-Za-z_$][\w$]*\.)*|(?:[A-Za-z_$][\w$]*\.)+)[A-Za-z_$][\w$]*(?:Exception|Error|Throwable)(?::.*)?$"#,
        )
        .expect("re_java_header: pattern is valid and should always compile")
    })
}

/// `at [module/]pkg.Class.method(File.java:N)`
///
/// Groups: 1 = class path including the trailing dot, 2 = method,
/// 3 = file name, 4 = line number.
pub(super) fn re_java_frame() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\s*at\s+(?:[\w$.@-]*/)*((?:[A-Za-z_$][\w$]*\.)+)([\w$]+|<init>|<clinit>)\(([^()/\\:]+\.java):(\d+)\)(?:\s+~?\[[^\]]*\])?\s*$",
        )
        .expect("re_java_frame: pattern is valid and should always compile")
    })
}

/// Frames without a usable source position: `(Native Method)`,
/// `(Unknown Source)`, or a file name with no line number.
pub(super) fn re_java_frame_no_source() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\s*at\s+(?:[\w$.@-]*/)*(?:[A-Za-z_$][\w$]*\.)+(?:[\w$]+|<init>|<clinit>)\((?:Native Method|Unknown Source|[^()/\\:]+\.java)\)(?:\s+~?\[[^\]]*\])?\s*$",
        )
        .expect("re_java_frame_no_source: pattern is valid and should always compile")
    })
}

/// `... N more` and logback's `... N common frames omitted`
pub(super) fn re_java_elision() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*\.\.\. \d+ (?:more|common frames omitted)\s*$")
            .expect("re_java_elision: pattern is valid and should always compile")
    })
}

// ---------------------------------------------------------------------------
// C# / .NET
// ---------------------------------------------------------------------------

/// `Unhandled Exception: Ns.Type: message` (.NET Framework / Mono) and
/// `Unhandled exception. Ns.Type: message` (.NET Core)
pub(super) fn re_csharp_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:Unhandled Exception: |Unhandled exception\. )(?:[A-Za-z_][\w`]*\.)*[A-Za-z_][\w`]*(?::.*)?$")
            .expect("re_csharp_header: pattern is valid and should always compile")
    })
}

/// ` ---> Ns.Type: message` inner-exception separator
pub(super) fn re_csharp_inner_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*---> (?:[A-Za-z_][\w`]*\.)+[A-Za-z_][\w`]*(?::.*)?$")
            .expect("re_csharp_inner_header: pattern is valid and should always compile")
    })
}

/// `--- End of inner exception stack trace ---` and friends
pub(super) fn re_csharp_end_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\s*--- End of (?:inner exception stack trace|stack trace from previous location(?: where exception was thrown)?) ---\s*$",
        )
        .expect("re_csharp_end_marker: pattern is valid and should always compile")
    })
}

/// `at Method(Args) in /path/with spaces/File.cs:line N`
///
/// Groups: 1 = path (everything up to the `:line ` marker), 2 = line number.
pub(super) fn re_csharp_frame() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*at\s+\S.*?\)\s+in\s+(\S.*?):line (\d+)\s*$")
            .expect("re_csharp_frame: pattern is valid and should always compile")
    })
}

/// `path(line,col[,endLine,endCol]): error|warning CODE: message [project]`
///
/// Groups: 1 = visible span `path(line,col)`, 2 = path, 3 = line,
/// 4 = column, 5 = project file (optional).
pub(super) fn re_csharp_diagnostic() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\s*((\S.*?)\((\d+),(\d+)(?:,\d+,\d+)?\))\s*:\s+(?:error|warning)\s+[A-Za-z]+\d+\s*:.*?(?:\s\[([^\[\]]+)\])?\s*$",
        )
        .expect("re_csharp_diagnostic: pattern is valid and should always compile")
    })
}
