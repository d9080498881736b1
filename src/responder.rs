/*
 * @file responder.rs
 * @brief Keyword-to-response matching for cybersecurity questions
 * @author Kevin Thomas
 * @date 2025
 *
 * MIT License
 *
 * Copyright (c) 2025 Kevin Thomas
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Keyword-to-response matching for cybersecurity questions.

/// Reply returned when no topic keyword matches the input.
pub const FALLBACK_RESPONSE: &str = "SCAR is still learning! If you could rephrase \
     your question or ask about specific topics like phishing, passwords, or \
     suspicious links, I would be happy to help.";

/// Ordered topic table mapping keywords to canned responses.
///
/// # Details
/// Keywords are stored lowercase; the input is lowercased once per lookup,
/// which makes matching case-insensitive. Declaration order is the
/// tie-break: the first keyword contained in the input wins, so an earlier
/// broad keyword can shadow a later specific one. The table is never
/// mutated at runtime.
static TOPICS: &[(&str, &str)] = &[
    (
        "phishing",
        "Phishing is a type of cyber attack where attackers try to trick you into \
         giving them sensitive information, like passwords or credit card numbers. \
         They often do this by sending fake emails or creating fake websites that \
         look real. Always be cautious and verify the source before clicking on \
         links or providing personal information.",
    ),
    (
        "password",
        "It's important to use strong passwords to protect your accounts. A strong \
         password should be at least 12 characters long and include a mix of \
         uppercase letters, lowercase letters, numbers, and special symbols. Avoid \
         using easily guessable information like your name or birthdate. Consider \
         using a password manager to help you keep track of your passwords securely.",
    ),
    (
        "suspicious links",
        "If you come across a link that looks suspicious, it's best to be cautious. \
         Before clicking, hover your mouse over the link to see the actual URL. If \
         it looks strange or doesn't match the website you expect, don't click it. \
         It's better to type the website address directly into your browser instead.",
    ),
    (
        "how",
        "It seems you're asking a question. Could you please provide more details \
         about what you're curious about? This will help me give you a better answer.",
    ),
    // Unreachable: any input containing "how are you" already matched the
    // bare "how" entry above. Kept in shipped table order.
    (
        "how are you",
        "I'm just a program, but I'm here to help you! Let's focus on keeping you \
         safe online. What would you like to know about cybersecurity?",
    ),
    (
        "purpose",
        "My purpose is to help you understand cybersecurity better. I provide \
         information and tips to help you stay safe online and protect your \
         personal information from cyber threats.",
    ),
    (
        "what can i ask",
        "You can ask me about various topics related to cybersecurity, such as \
         phishing, password safety, suspicious links, malware, data privacy, and \
         more. I'm here to help you with any questions you have!",
    ),
    (
        "malware",
        "Malware is short for malicious software. It's designed to harm your \
         computer or steal your information. Common types of malware include \
         viruses, worms, and ransomware. To protect yourself, always keep your \
         antivirus software updated and avoid downloading files from untrusted \
         sources.",
    ),
    (
        "data privacy",
        "Data privacy is about how your personal information is collected, used, \
         and shared. It's important to understand what data you are sharing and \
         with whom. Always read privacy policies before providing your information \
         to websites or apps, and be cautious about what you share online.",
    ),
    (
        "two-factor authentication",
        "Two-factor authentication (2FA) is an extra layer of security for your \
         accounts. It requires not only your password but also a second piece of \
         information, like a code sent to your phone. This makes it much harder \
         for someone to access your account, even if they have your password.",
    ),
    (
        "cybersecurity tips",
        "Here are some important cybersecurity tips: 1) Use strong, unique \
         passwords for each of your accounts. 2) Be cautious with emails and \
         messages from unknown senders. 3) Keep your software and devices updated \
         to protect against vulnerabilities. 4) Use two-factor authentication \
         whenever possible. 5) Regularly back up your important data.",
    ),
];

/// Picks the canned response for a question.
///
/// # Details
/// Scans the topic table in declaration order and returns the response
/// paired with the first keyword found as a case-insensitive substring of
/// the input. Pure and deterministic; at most one response per input.
///
/// # Arguments
/// * `text` - The user's question; non-empty, blank input is filtered upstream.
///
/// # Returns
/// * `&'static str` - The matched response, or [`FALLBACK_RESPONSE`] when
///   no keyword matches.
pub fn respond(text: &str) -> &'static str {
    let normalized = text.to_lowercase();
    TOPICS
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, response)| *response)
        .unwrap_or(FALLBACK_RESPONSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phishing_matches_any_case() {
        let expected = respond("phishing");
        assert!(expected.starts_with("Phishing is a type of cyber attack"));
        assert_eq!(respond("Tell me about PHISHING attacks"), expected);
        assert_eq!(respond("pHiShInG?"), expected);
    }

    #[test]
    fn bare_how_shadows_how_are_you() {
        let clarification = respond("How do I stay safe?");
        assert!(clarification.starts_with("It seems you're asking a question"));
        assert_eq!(respond("how are you"), clarification);
        assert_eq!(respond("HOW ARE YOU TODAY"), clarification);
    }

    #[test]
    fn declaration_order_breaks_ties() {
        // "phishing" (first entry) wins over "password" when both appear.
        assert!(respond("phishing or password?").starts_with("Phishing is a type"));
    }

    #[test]
    fn malware_question_gets_definition() {
        assert!(respond("What is malware?").starts_with("Malware is short for malicious software"));
    }

    #[test]
    fn unmatched_input_gets_fallback() {
        assert_eq!(respond("tell me a joke"), FALLBACK_RESPONSE);
        assert_eq!(respond("weather please"), FALLBACK_RESPONSE);
    }

    #[test]
    fn responses_are_deterministic() {
        assert_eq!(respond("data privacy"), respond("data privacy"));
        assert_eq!(respond("no match here at all"), respond("no match here at all"));
    }

    #[test]
    fn keywords_are_stored_lowercase() {
        for (keyword, _) in TOPICS {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }
}
