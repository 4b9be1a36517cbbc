//! 意图识别
//!
//! 按固定顺序匹配关键词，第一个命中的意图生效

use serde::{Deserialize, Serialize};

use super::dialect::fold;

/// 用户意图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    ProductInquiry,
    OrderStatus,
    PriceInquiry,
    Availability,
    Complaint,
    Payment,
    Shipping,
    Return,
    Farewell,
}

impl Intent {
    /// 匹配顺序
    pub const ALL: [Intent; 10] = [
        Intent::Greeting,
        Intent::ProductInquiry,
        Intent::OrderStatus,
        Intent::PriceInquiry,
        Intent::Availability,
        Intent::Complaint,
        Intent::Payment,
        Intent::Shipping,
        Intent::Return,
        Intent::Farewell,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::ProductInquiry => "product_inquiry",
            Intent::OrderStatus => "order_status",
            Intent::PriceInquiry => "price_inquiry",
            Intent::Availability => "availability",
            Intent::Complaint => "complaint",
            Intent::Payment => "payment",
            Intent::Shipping => "shipping",
            Intent::Return => "return",
            Intent::Farewell => "farewell",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Intent::Greeting => &[
                "السلام", "مرحبا", "أهلا", "صباح", "مساء", "ازيك", "عامل", "ايه", "إيه",
            ],
            Intent::ProductInquiry => &[
                "عايز", "محتاج", "عاوز", "بدور على", "ابحث عن", "منتج", "حاجة",
            ],
            Intent::OrderStatus => &["طلب", "أوردر", "شحنة", "وين", "فين", "وصل", "متى يصل"],
            Intent::PriceInquiry => &["سعر", "بكام", "كام", "تمن", "ثمن", "قد ايه"],
            Intent::Availability => &["متوفر", "موجود", "عندكم", "في المخزون"],
            Intent::Complaint => &["مشكلة", "شكوى", "غلط", "خطأ", "زعلان", "مش راضي"],
            Intent::Payment => &["دفع", "الدفع", "كاش", "فيزا", "فودافون كاش", "انستاباي"],
            Intent::Shipping => &["توصيل", "شحن", "التوصيل", "الشحن", "يوصل", "متى يصل"],
            Intent::Return => &["ارجاع", "استرجاع", "استبدال", "رجوع"],
            Intent::Farewell => &["شكرا", "مع السلامة", "باي", "وداعا", "تمام كده"],
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 从消息中提取的意图参数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// 关键词意图识别器
///
/// 关键词在构造时折叠一次，匹配时对消息做同样的折叠
#[derive(Debug, Clone)]
pub struct IntentDetector {
    patterns: Vec<(Intent, Vec<String>)>,
}

impl Default for IntentDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentDetector {
    pub fn new() -> Self {
        let patterns = Intent::ALL
            .iter()
            .map(|intent| {
                let keywords = intent.keywords().iter().map(|k| match_key(k)).collect();
                (*intent, keywords)
            })
            .collect();
        Self { patterns }
    }

    /// 识别意图，空消息或无匹配返回 None
    pub fn detect(&self, text: &str) -> Option<Intent> {
        let folded = match_key(text);
        if folded.is_empty() {
            return None;
        }

        self.patterns
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| folded.contains(k.as_str())))
            .map(|(intent, _)| *intent)
    }

    /// 按意图提取参数
    pub fn extract_params(&self, text: &str, intent: Intent) -> IntentParams {
        match intent {
            Intent::OrderStatus => IntentParams {
                order_id: extract_order_id(text),
                query: None,
            },
            Intent::ProductInquiry => IntentParams {
                order_id: None,
                query: Some(text.trim().to_string()),
            },
            _ => IntentParams::default(),
        }
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('\u{0660}'..='\u{0669}').contains(&c)
}

/// 匹配用的形式：字符折叠后再转小写
fn match_key(text: &str) -> String {
    fold(text).to_lowercase()
}

/// 第一段连续数字（ASCII 或阿拉伯-印度数字）
fn extract_order_id(text: &str) -> Option<String> {
    let start = text.find(is_digit)?;
    let id: String = text[start..].chars().take_while(|c| is_digit(*c)).collect();
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_has_no_intent() {
        let detector = IntentDetector::new();
        assert_eq!(detector.detect(""), None);
        assert_eq!(detector.detect("   "), None);
    }

    #[test]
    fn test_price_inquiry() {
        let detector = IntentDetector::new();
        assert_eq!(detector.detect("القميص ده بكام؟"), Some(Intent::PriceInquiry));
    }

    #[test]
    fn test_greeting_checked_first() {
        let detector = IntentDetector::new();
        assert_eq!(detector.detect("السلام عليكم"), Some(Intent::Greeting));
        // "اهلا" 没有 hamza 也能匹配 "أهلا"
        assert_eq!(detector.detect("اهلا"), Some(Intent::Greeting));
    }

    #[test]
    fn test_order_status_and_params() {
        let detector = IntentDetector::new();
        let text = "الطلب رقم #4521 اتأخر";
        assert_eq!(detector.detect(text), Some(Intent::OrderStatus));

        let params = detector.extract_params(text, Intent::OrderStatus);
        assert_eq!(params.order_id.as_deref(), Some("4521"));
        assert!(params.query.is_none());
    }

    #[test]
    fn test_arabic_indic_order_id() {
        assert_eq!(extract_order_id("رقم ١٢٣"), Some("١٢٣".to_string()));
        assert_eq!(extract_order_id("no digits"), None);
    }

    #[test]
    fn test_latin_case_ignored_for_matching() {
        let detector = IntentDetector::new();
        assert_eq!(detector.detect("NIKE بكام"), Some(Intent::PriceInquiry));
        assert_eq!(match_key("Nike  Air"), "nike air");
    }

    #[test]
    fn test_unmatched_message() {
        let detector = IntentDetector::new();
        assert_eq!(detector.detect("hello there"), None);
    }

    #[test]
    fn test_product_inquiry_query() {
        let detector = IntentDetector::new();
        let text = " عايز جزمة ";
        assert_eq!(detector.detect(text), Some(Intent::ProductInquiry));
        let params = detector.extract_params(text, Intent::ProductInquiry);
        assert_eq!(params.query.as_deref(), Some("عايز جزمة"));
    }

    #[test]
    fn test_intent_serializes_snake_case() {
        let json = serde_json::to_string(&Intent::PriceInquiry).unwrap();
        assert_eq!(json, "\"price_inquiry\"");
    }
}
