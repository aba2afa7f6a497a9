//! Prompt templates for the speech generation pipeline
//!
//! Pure string transforms, deterministic for a given input, testable
//! without network access. The templates are Polish, matching the
//! product's output language.

use domain::{SpeechParams, Tone};

/// Generic AI transition phrases the humanization pass removes
pub const AI_TRANSITION_PHRASES: [&str; 8] = [
    "Podsumowując...",
    "Warto zauważyć...",
    "W dzisiejszych czasach...",
    "Co więcej...",
    "Niewątpliwie...",
    "Reasumując...",
    "Należy podkreślić...",
    "Bez wątpienia...",
];

/// The JSON shape judges must answer with
const JUDGE_FORMAT: &str =
    "Odpowiedz TYLKO w formacie JSON (bez markdown):\n{ \"score\": <liczba 0-100>, \"feedback\": [\"uwaga 1\", \"uwaga 2\"] }";

/// Render the initial generation prompt
#[must_use]
pub fn generation_prompt(params: &SpeechParams) -> String {
    let details = params
        .details
        .as_deref()
        .map(|d| format!("DODATKOWE SZCZEGÓŁY: {d}\n"))
        .unwrap_or_default();

    format!(
        "Jesteś profesjonalnym autorem przemówień. Napisz przemówienie spełniające poniższe wymagania:\n\n\
         TEMAT: {topic}\n\
         TON: {tone}\n\
         DŁUGOŚĆ: {duration}\n\
         ODBIORCY: {audience}\n\
         {details}\n\
         ZASADY:\n\
         1. Pisz naturalnym, płynnym językiem polskim\n\
         2. Unikaj typowych fraz AI jak \"Podsumowując...\", \"Warto zauważyć...\", \"W dzisiejszych czasach...\"\n\
         3. Zachowaj strukturę: wstęp (hook) → rozwinięcie → mocne zakończenie\n\
         4. Dostosuj słownictwo i złożoność do odbiorców\n\
         5. Użyj retorycznych pytań, anegdot i metafor gdzie pasuje\n\
         6. Tekst ma być gotowy do wygłoszenia na głos - nie używaj skomplikowanych struktur\n\
         7. Zachowaj odpowiednią długość dla {duration}\n\n\
         Napisz TYLKO przemówienie, bez komentarzy czy meta-informacji.",
        topic = params.topic,
        tone = params.tone,
        duration = params.duration,
        audience = params.audience,
        details = details,
    )
}

/// Render the naturalness-check judge prompt
#[must_use]
pub fn naturalness_prompt(speech: &str) -> String {
    format!(
        "Jesteś ekspertem od naturalnego języka polskiego.\n\
         Przeanalizuj poniższe przemówienie pod kątem:\n\
         1. Czy brzmi naturalnie, jak napisane przez człowieka?\n\
         2. Czy nie zawiera typowych fraz AI (np. \"Podsumowując...\", \"Warto zauważyć...\")?\n\
         3. Czy ma odpowiedni rytm i kadencję dla przemówienia mówionego?\n\n\
         Przemówienie:\n\
         \"\"\"\n\
         {speech}\n\
         \"\"\"\n\n\
         {JUDGE_FORMAT}"
    )
}

/// Render the style-check judge prompt for the required tone
#[must_use]
pub fn style_prompt(speech: &str, tone: Tone) -> String {
    format!(
        "Jesteś redaktorem językowym. Oceń tekst pod kątem:\n\
         1. Poprawności gramatycznej i interpunkcyjnej\n\
         2. Spójności stylu (wymagany ton: {tone})\n\
         3. Odpowiedniej długości zdań dla przemówienia\n\n\
         Tekst:\n\
         \"\"\"\n\
         {speech}\n\
         \"\"\"\n\n\
         {JUDGE_FORMAT}"
    )
}

/// Render the logic-check judge prompt
#[must_use]
pub fn logic_prompt(speech: &str) -> String {
    format!(
        "Jesteś analitykiem treści. Sprawdź:\n\
         1. Czy argumenty są logicznie powiązane?\n\
         2. Czy struktura (wstęp-rozwinięcie-zakończenie) jest zachowana?\n\
         3. Czy nie ma powtórzeń lub sprzeczności?\n\n\
         Tekst:\n\
         \"\"\"\n\
         {speech}\n\
         \"\"\"\n\n\
         {JUDGE_FORMAT}"
    )
}

/// Render the refinement prompt from aggregated judge feedback
#[must_use]
pub fn refinement_prompt(speech: &str, feedback: &[String], params: &SpeechParams) -> String {
    let remarks = feedback
        .iter()
        .map(|f| format!("- {f}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Popraw poniższe przemówienie na podstawie uwag ekspertów.\n\n\
         Uwagi do poprawy:\n\
         {remarks}\n\n\
         Oryginalne przemówienie:\n\
         \"\"\"\n\
         {speech}\n\
         \"\"\"\n\n\
         Wymagany ton: {tone}\n\
         Odbiorcy: {audience}\n\n\
         Zwróć TYLKO poprawiony tekst przemówienia, bez komentarzy czy wyjaśnień.",
        tone = params.tone,
        audience = params.audience,
    )
}

/// Render the final humanization prompt
#[must_use]
pub fn humanization_prompt(speech: &str) -> String {
    let catalogue = AI_TRANSITION_PHRASES
        .iter()
        .map(|p| format!("- \"{p}\""))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Jesteś redaktorem usuwającym z tekstów maniery typowe dla generatorów AI.\n\
         Przepisz poniższe przemówienie, usuwając lub zastępując szablonowe frazy przejściowe, takie jak:\n\
         {catalogue}\n\n\
         ZASADY:\n\
         1. Zachowaj główny przekaz przemówienia\n\
         2. Zachowaj długość tekstu w granicach ±10%\n\
         3. Zachowaj ton i charakter wypowiedzi\n\n\
         Tekst:\n\
         \"\"\"\n\
         {speech}\n\
         \"\"\"\n\n\
         Zwróć TYLKO poprawiony tekst, bez komentarzy czy wyjaśnień."
    )
}

#[cfg(test)]
mod tests {
    use domain::{Audience, SpeechDuration, Tone};

    use super::*;

    fn params() -> SpeechParams {
        SpeechParams::new(
            "Rozpoczęcie roku akademickiego",
            Tone::Academic,
            SpeechDuration::TenMinutes,
            Audience::Students,
        )
    }

    #[test]
    fn generation_prompt_embeds_all_params() {
        let prompt = generation_prompt(&params());
        assert!(prompt.contains("TEMAT: Rozpoczęcie roku akademickiego"));
        assert!(prompt.contains("TON: akademicki"));
        assert!(prompt.contains("DŁUGOŚĆ: 10 minut"));
        assert!(prompt.contains("ODBIORCY: studenci"));
        assert!(!prompt.contains("DODATKOWE SZCZEGÓŁY"));
    }

    #[test]
    fn generation_prompt_includes_optional_details() {
        let prompt = generation_prompt(&params().with_details("wspomnij o stypendiach"));
        assert!(prompt.contains("DODATKOWE SZCZEGÓŁY: wspomnij o stypendiach"));
    }

    #[test]
    fn generation_prompt_is_deterministic() {
        assert_eq!(generation_prompt(&params()), generation_prompt(&params()));
    }

    #[test]
    fn judge_prompts_embed_speech_and_json_shape() {
        let speech = "Drodzy studenci, witam was serdecznie.";
        for prompt in [
            naturalness_prompt(speech),
            style_prompt(speech, Tone::Academic),
            logic_prompt(speech),
        ] {
            assert!(prompt.contains(speech));
            assert!(prompt.contains("\"score\""));
            assert!(prompt.contains("\"feedback\""));
        }
    }

    #[test]
    fn style_prompt_names_required_tone() {
        let prompt = style_prompt("tekst", Tone::Humorous);
        assert!(prompt.contains("wymagany ton: humorystyczny"));
    }

    #[test]
    fn refinement_prompt_lists_every_feedback_item() {
        let feedback = vec![
            "za długie zdania".to_string(),
            "słabe zakończenie".to_string(),
        ];
        let prompt = refinement_prompt("tekst przemówienia", &feedback, &params());
        assert!(prompt.contains("- za długie zdania"));
        assert!(prompt.contains("- słabe zakończenie"));
        assert!(prompt.contains("Wymagany ton: akademicki"));
        assert!(prompt.contains("Odbiorcy: studenci"));
        assert!(prompt.contains("tekst przemówienia"));
    }

    #[test]
    fn humanization_prompt_enumerates_the_catalogue() {
        let prompt = humanization_prompt("tekst");
        for phrase in AI_TRANSITION_PHRASES {
            assert!(prompt.contains(phrase), "missing phrase: {phrase}");
        }
        assert!(prompt.contains("±10%"));
    }
}
