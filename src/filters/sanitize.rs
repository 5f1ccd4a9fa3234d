//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Vet.
//! The Vet project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Sanitization Filters
//!
//! Built-in value transforms with the fixed signature
//! `(value, args) -> value`. Scalars are coerced to their display string
//! before transformation; `whole_number` yields a number. The `default`
//! filter is engine-level (it is the only filter that auto-creates its
//! slot) and is exposed here as [`apply_default`].

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::alias::VetNumberFlag;
use crate::record::display_string;

/// Signature shared by every built-in sanitization transform.
pub type SanitizeFn = fn(&Value, &[String]) -> Value;

/// HTML tags preserved by the `basichtmltags` transform.
pub const BASIC_HTML_TAGS: &[&str] = &[
    "a", "b", "blockquote", "br", "code", "dd", "dl", "em", "hr", "h1", "h2", "h3", "h4", "h5",
    "h6", "i", "img", "label", "li", "p", "span", "strong", "sub", "sup", "ul",
];

/// English noise words removed by the `noisewords` transform.
pub const EN_NOISE_WORDS: &str = "about,after,all,also,an,and,another,any,\
are,as,at,be,because,been,before,being,between,both,but,by,came,\
can,come,could,did,do,each,for,from,get, got,has,had,he,have,\
her,here,him,himself,his,how,if,in,into,is,it,its,it's,like,\
make,many,me,might,more,most,much,must,my,never,now,of,on,only,\
or,other,our,out,over,said,same,see,should,since,some,still,\
such,take,than,that,the,their,them,then,there,these,they,this,\
those,through,to,too,under,up,very,was,way,we,well,were,what,\
where,which,while,who,with,would,you,your,a,b,c,d,e,f,g,h,i,j,k,\
l,m,n,o,p,q,r,s,t,u,v,w,x,y,z,$,1,2,3,4,5,6,7,8,9,0,_";

/// Registry mapping canonical names to built-in transforms.
#[allow(non_snake_case)]
pub fn registry() -> &'static HashMap<&'static str, SanitizeFn> {
    static REGISTRY: OnceLock<HashMap<&'static str, SanitizeFn>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut table: HashMap<&'static str, SanitizeFn> = HashMap::new();
        table.insert("urlencode", sanitize_urlencode);
        table.insert("basichtmltags", sanitize_basichtmltags);
        table.insert("email", sanitize_email);
        table.insert("float", sanitize_float);
        table.insert("htmlencode", sanitize_htmlencode);
        table.insert("lowercase", sanitize_lowercase);
        table.insert("noisewords", sanitize_noisewords);
        table.insert("nopunctuation", sanitize_nopunctuation);
        table.insert("numeric", sanitize_numeric);
        table.insert("string", sanitize_string);
        table.insert("trim", sanitize_trim);
        table.insert("uppercase", sanitize_uppercase);
        table.insert("whole_number", sanitize_whole_number);
        table
    })
}

/// Last-resort registry of std string operations addressable by name.
///
/// This replaces the reflective host-function fallback of loosely typed
/// ports: still a map lookup, never a name-constructed call.
#[allow(non_snake_case)]
pub fn platform_registry() -> &'static HashMap<&'static str, SanitizeFn> {
    static REGISTRY: OnceLock<HashMap<&'static str, SanitizeFn>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut table: HashMap<&'static str, SanitizeFn> = HashMap::new();
        table.insert("to_lowercase", sanitize_lowercase);
        table.insert("to_uppercase", sanitize_uppercase);
        table.insert("trim_start", platform_trim_start);
        table.insert("trim_end", platform_trim_end);
        table
    })
}

fn text(value: &Value) -> String {
    display_string(value)
}

fn platform_trim_start(value: &Value, _args: &[String]) -> Value {
    Value::String(text(value).trim_start().to_string())
}

fn platform_trim_end(value: &Value, _args: &[String]) -> Value {
    Value::String(text(value).trim_end().to_string())
}

/// Sets the slot to `arg1` iff it currently holds null or empty string.
#[allow(non_snake_case)]
pub fn apply_default(value: &Value, args: &[String]) -> Value {
    let is_unset = matches!(value, Value::Null) || matches!(value, Value::String(s) if s.is_empty());
    if is_unset {
        Value::String(args.first().cloned().unwrap_or_default())
    } else {
        value.clone()
    }
}

/// Percent-encodes every byte outside the unreserved set.
pub fn sanitize_urlencode(value: &Value, _args: &[String]) -> Value {
    let mut out = String::new();
    for byte in text(value).bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    Value::String(out)
}

/// Strips all HTML tags except the basic allowlist.
pub fn sanitize_basichtmltags(value: &Value, _args: &[String]) -> Value {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let re = TAG_RE.get_or_init(|| Regex::new(r"</?([A-Za-z][A-Za-z0-9]*)[^>]*>").unwrap());
    let binding = text(value);
    let out = re.replace_all(&binding, |caps: &regex::Captures| {
        if BASIC_HTML_TAGS.contains(&caps[1].to_lowercase().as_str()) {
            caps[0].to_string()
        } else {
            String::new()
        }
    });
    Value::String(out.into_owned())
}

/// Removes characters illegal in email addresses.
pub fn sanitize_email(value: &Value, _args: &[String]) -> Value {
    const LEGAL: &str = "!#$%&'*+-/=?^_`{|}~@.[]";
    let out: String = text(value)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || LEGAL.contains(*c))
        .collect();
    Value::String(out)
}

/// Keeps only characters legal in a float literal.
///
/// Fractions are always kept; `allow_thousand` keeps separators and
/// `allow_scientific` keeps the exponent characters.
pub fn sanitize_float(value: &Value, args: &[String]) -> Value {
    let flags: Vec<VetNumberFlag> = args
        .iter()
        .filter_map(|arg| VetNumberFlag::from_token(arg))
        .collect();
    let thousand = flags.contains(&VetNumberFlag::AllowThousand);
    let scientific = flags.contains(&VetNumberFlag::AllowScientific);

    let out: String = text(value)
        .chars()
        .filter(|c| {
            c.is_ascii_digit()
                || *c == '+'
                || *c == '-'
                || *c == '.'
                || (thousand && *c == ',')
                || (scientific && (*c == 'e' || *c == 'E'))
        })
        .collect();
    Value::String(out)
}

/// Converts HTML-special characters to numeric entities.
pub fn sanitize_htmlencode(value: &Value, _args: &[String]) -> Value {
    let out = text(value)
        .replace('&', "&#38;")
        .replace('<', "&#60;")
        .replace('>', "&#62;")
        .replace('"', "&#34;")
        .replace('\'', "&#39;");
    Value::String(out)
}

pub fn sanitize_lowercase(value: &Value, _args: &[String]) -> Value {
    Value::String(text(value).to_lowercase())
}

pub fn sanitize_uppercase(value: &Value, _args: &[String]) -> Value {
    Value::String(text(value).to_uppercase())
}

fn noise_words() -> &'static HashSet<String> {
    static WORDS: OnceLock<HashSet<String>> = OnceLock::new();
    WORDS.get_or_init(|| {
        EN_NOISE_WORDS
            .split(',')
            .map(|word| word.trim().to_string())
            .collect()
    })
}

/// Removes English noise words, collapsing runs of whitespace.
pub fn sanitize_noisewords(value: &Value, _args: &[String]) -> Value {
    let out = text(value)
        .split_whitespace()
        .filter(|token| !noise_words().contains(&token.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ");
    Value::String(out)
}

/// Strips Unicode punctuation except `.=$'€%-`.
pub fn sanitize_nopunctuation(value: &Value, _args: &[String]) -> Value {
    static PUNCT_RE: OnceLock<Regex> = OnceLock::new();
    let re = PUNCT_RE.get_or_init(|| Regex::new(r"[\p{P}--[.=$'€%\-]]").unwrap());
    Value::String(re.replace_all(&text(value), "").into_owned())
}

/// Keeps only digits and signs.
pub fn sanitize_numeric(value: &Value, _args: &[String]) -> Value {
    let out: String = text(value)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == '-')
        .collect();
    Value::String(out)
}

/// Strips markup and encodes quotes.
///
/// The `no_encode_quotes` flag argument leaves quotes alone.
pub fn sanitize_string(value: &Value, args: &[String]) -> Value {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());
    let mut out = re.replace_all(&text(value), "").into_owned();
    let keep_quotes = args.iter().any(|arg| arg.eq_ignore_ascii_case("no_encode_quotes"));
    if !keep_quotes {
        out = out.replace('"', "&#34;").replace('\'', "&#39;");
    }
    Value::String(out)
}

/// Trims whitespace, or the characters given as arguments.
pub fn sanitize_trim(value: &Value, args: &[String]) -> Value {
    let source = text(value);
    let out = if args.is_empty() {
        source.trim().to_string()
    } else {
        let set: Vec<char> = args.concat().chars().collect();
        source.trim_matches(|c| set.contains(&c)).to_string()
    };
    Value::String(out)
}

/// Coerces the value to its leading whole number, zero when none.
pub fn sanitize_whole_number(value: &Value, _args: &[String]) -> Value {
    let source = text(value);
    let trimmed = source.trim();
    let mut digits = String::new();
    for (index, c) in trimmed.chars().enumerate() {
        if index == 0 && (c == '+' || c == '-') {
            digits.push(c);
        } else if c.is_ascii_digit() {
            digits.push(c);
        } else {
            break;
        }
    }
    let number = digits.parse::<i64>().unwrap_or(0);
    Value::Number(number.into())
}
