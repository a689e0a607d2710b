/*!
 * Instruction construction for Tagalog translation.
 *
 * The directive sent to the backend is rendered once per run from the tone
 * and glossary options and reused unmodified for every chunk; terminology and
 * register stay consistent across chunk boundaries because every request
 * carries the same instruction.
 */

use crate::app_config::Tone;
use crate::translation::TranslationOptions;

/// Register line for the formal tone
const FORMAL_TONE: &str = "Gamitin ang **magalang at pormal** na Tagalog (Filipino),";

/// Register line for the informal tone
const INFORMAL_TONE: &str =
    "Gamitin ang **natural at malinaw** na Tagalog (Filipino) na pangkalahatang mambabasa,";

/// Builder for the translation directive.
///
/// Pure function of its inputs: no I/O, no backend call, and identical
/// options always render the identical string.
#[derive(Debug, Clone)]
pub struct InstructionBuilder {
    tone: Tone,
    glossary: Vec<String>,
}

impl InstructionBuilder {
    /// The directive template with placeholders filled by build().
    const DIRECTIVE: &'static str = r#"Ikaw ay isang **propesyonal at lubos na maingat na tagasalin**.
Layunin: tumpak, kumpleto, at idiomatic na pagsasalin sa Tagalog (Filipino), may tamang daloy at konteksto.
Mga panuntunan:
- {tone} at panatilihin ang kahulugan, tono, at intensyon ng orihinal.
- Iwasan ang literal na salin kapag hindi natural; gumamit ng katumbas na idyoma sa Filipino.
- Panatilihin: mga pangalan, terminong teknikal, code blocks, numero, unit, URL, at email.
- Ayusin ang bantas at baybay upang maging malinis at madaling basahin.
- Huwag magdagdag o magbawas ng impormasyon; huwag magkomento—**pagsasalin lamang ang ilalabas**.
- Gumamit ng “ni/sa/kay/kina” at iba pang pang-ukol nang wasto; iwasan ang sobrang pag-ingles.
- Kung may di-malinaw, isalin sa pinaka-makatwirang paraan batay sa konteksto.
{glossary_guidance}
Output: **Isang kumpletong salin sa Tagalog**; panatilihin ang talata/format ng orihinal."#;

    /// Create a builder with the given tone and no glossary.
    pub fn new(tone: Tone) -> Self {
        Self {
            tone,
            glossary: Vec::new(),
        }
    }

    /// Create a builder from validated run options.
    pub fn from_options(options: &TranslationOptions) -> Self {
        Self::new(options.tone.clone()).with_glossary(&options.glossary)
    }

    /// Set the terms that must survive translation verbatim.
    ///
    /// Terms are trimmed and empty entries dropped; order is preserved.
    pub fn with_glossary(mut self, terms: &[String]) -> Self {
        self.glossary = terms
            .iter()
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty())
            .collect();
        self
    }

    /// Render the directive.
    pub fn build(&self) -> String {
        let tone = match self.tone {
            Tone::Formal => FORMAL_TONE,
            Tone::Informal => INFORMAL_TONE,
        };

        let glossary_guidance = if self.glossary.is_empty() {
            String::new()
        } else {
            let terms = self
                .glossary
                .iter()
                .map(|term| format!("“{}”", term))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "\n- Huwag isalin ang mga sumusunod (panatilihing eksakto ang baybay): {}.",
                terms
            )
        };

        Self::DIRECTIVE
            .replace("{tone}", tone)
            .replace("{glossary_guidance}", &glossary_guidance)
    }
}
