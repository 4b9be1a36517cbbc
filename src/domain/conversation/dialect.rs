//! 埃及方言归一化
//!
//! 处理流程:
//! 1. 去除首尾空白，合并连续空白
//! 2. 方言词/短语 -> 标准阿拉伯语（最长匹配优先）
//! 3. 字符折叠（alef 变体、teh marbuta、去除变音符号）

/// 短语最大词数
const MAX_PHRASE_WORDS: usize = 3;

/// 方言 -> 标准阿拉伯语映射
const DIALECT_MAPPINGS: &[(&str, &str)] = &[
    // 问候
    ("ازيك", "كيف حالك"),
    ("ازاي", "كيف"),
    ("إزاي", "كيف"),
    ("إيه", "ماذا"),
    ("ايه", "ماذا"),
    ("عامل ايه", "كيف حالك"),
    ("عامل إيه", "كيف حالك"),
    // 疑问
    ("فين", "أين"),
    ("منين", "من أين"),
    ("امتى", "متى"),
    ("ليه", "لماذا"),
    // 常用词
    ("عايز", "أريد"),
    ("عاوز", "أريد"),
    ("محتاج", "أحتاج"),
    ("بدي", "أريد"),
    ("ممكن", "هل يمكن"),
    ("ينفع", "هل يمكن"),
    // 商品
    ("حاجة", "شيء"),
    ("حاجه", "شيء"),
    ("هدوم", "ملابس"),
    // 价格
    ("بكام", "بكم"),
    ("بقد ايه", "بكم"),
    // 肯定
    ("اه", "نعم"),
    ("آه", "نعم"),
    ("ايوه", "نعم"),
    ("أيوة", "نعم"),
    ("تمام", "نعم"),
    ("ماشي", "نعم"),
    // 否定
    ("لأ", "لا"),
    ("مش", "ليس"),
    ("ما", "لا"),
    // 惯用语
    ("يا سلام", "رائع"),
    ("يا نهار", "يا للعجب"),
    ("الله", "حسناً"),
    ("ربنا يخليك", "شكراً"),
    ("جزاك الله خيراً", "شكراً"),
];

/// 方言归一化器
#[derive(Debug, Default, Clone, Copy)]
pub struct DialectNormalizer;

impl DialectNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// 完整归一化：空白整理 + 方言映射 + 字符折叠
    pub fn normalize(&self, text: &str) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return String::new();
        }

        let mut out: Vec<&str> = Vec::with_capacity(words.len());
        let mut i = 0;
        while i < words.len() {
            match longest_mapping(&words[i..]) {
                Some((consumed, replacement)) => {
                    out.push(replacement);
                    i += consumed;
                }
                None => {
                    out.push(words[i]);
                    i += 1;
                }
            }
        }

        fold(&out.join(" "))
    }
}

/// 在 `words` 开头查找最长的方言短语
fn longest_mapping(words: &[&str]) -> Option<(usize, &'static str)> {
    let max = words.len().min(MAX_PHRASE_WORDS);
    (1..=max).rev().find_map(|n| {
        let phrase = words[..n].join(" ");
        DIALECT_MAPPINGS
            .iter()
            .find(|(dialect, _)| *dialect == phrase)
            .map(|(_, msa)| (n, *msa))
    })
}

/// 字符折叠（用于匹配和输出）
///
/// - إ أ ٱ آ -> ا
/// - ة -> ه
/// - 去除 U+064B..=U+065F 变音符号
/// - 合并空白
///
/// 不改变大小写，归一化结果会原样返回给客户端
pub fn fold(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter(|c| !('\u{064B}'..='\u{065F}').contains(c))
        .map(|c| match c {
            'إ' | 'أ' | 'ٱ' | 'آ' => 'ا',
            'ة' => 'ه',
            other => other,
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(DialectNormalizer::new().normalize("   "), "");
    }

    #[test]
    fn test_single_word_mapping() {
        let normalizer = DialectNormalizer::new();
        // عايز -> أريد -> اريد (alef 折叠)
        assert_eq!(normalizer.normalize("عايز  قميص"), "اريد قميص");
        assert_eq!(normalizer.normalize("بكام"), "بكم");
    }

    #[test]
    fn test_phrase_wins_over_single_word() {
        let normalizer = DialectNormalizer::new();
        assert_eq!(normalizer.normalize("عامل ايه"), "كيف حالك");
        assert_eq!(normalizer.normalize("جزاك الله خيراً"), "شكرا");
    }

    #[test]
    fn test_normalize_keeps_latin_case() {
        let normalizer = DialectNormalizer::new();
        assert_eq!(normalizer.normalize("عايز  Nike Air"), "اريد Nike Air");
    }

    #[test]
    fn test_fold_characters() {
        assert_eq!(fold("أهلاً"), "اهلا");
        assert_eq!(fold("شحنة"), "شحنه");
        assert_eq!(fold("  Hello   World "), "Hello World");
    }
}
