//! 意图回复模板（埃及方言）

use rand::seq::SliceRandom;
use rand::Rng;

use super::Intent;

const GREETINGS: &[&str] = &[
    "أهلاً وسهلاً! أنا هنا لمساعدتك في BWW Store. إزاي أقدر أساعدك؟",
    "مرحباً بيك في BWW Store! عامل إيه؟ عايز تعرف إيه عن منتجاتنا؟",
    "السلام عليكم! نورت BWW Store. أقدر أساعدك في إيه؟",
];

const FAREWELLS: &[&str] = &[
    "شكراً ليك! لو احتجت أي حاجة تاني أنا موجود دايماً. 😊",
    "العفو! يوم سعيد وإن شاء الله نشوفك تاني قريب!",
    "مع السلامة! BWW Store دايماً موجود لخدمتك.",
];

/// 无法识别意图时的回复
pub const FALLBACK_REPLY: &str =
    "معلش مفهمتش قصدك بالظبط. ممكن توضح أكتر؟ أو ممكن تسأل عن: المنتجات، الأسعار، التوصيل، أو الطلبات.";

/// 生成回复
///
/// greeting / farewell 从三个候选中随机选择，其余意图为固定模板
pub fn reply_for<R: Rng + ?Sized>(intent: Option<Intent>, rng: &mut R) -> &'static str {
    let Some(intent) = intent else {
        return FALLBACK_REPLY;
    };

    match intent {
        Intent::Greeting => GREETINGS.choose(rng).copied().unwrap_or(GREETINGS[0]),
        Intent::Farewell => FAREWELLS.choose(rng).copied().unwrap_or(FAREWELLS[0]),
        Intent::ProductInquiry => {
            "عندنا مجموعة كبيرة من المنتجات. عايز تعرف عن منتج معين؟ قولي عايز إيه وهقولك كل حاجة عنه."
        }
        Intent::OrderStatus => {
            "عشان أتابع طلبك، ممكن تديني رقم الطلب؟ أو لو عارف الإيميل اللي سجلت بيه، هقدر أجيب كل طلباتك."
        }
        Intent::Complaint => {
            "أنا آسف جداً للمشكلة اللي حصلت. ممكن تقولي تفاصيل المشكلة عشان أقدر أساعدك؟ راحتك وسعادتك مهمة جداً بالنسبالنا."
        }
        Intent::PriceInquiry => {
            "أسعارنا تنافسية جداً! قولي على المنتج اللي عايز تعرف سعره وهقولك كل التفاصيل والعروض المتاحة."
        }
        Intent::Availability => {
            "عشان أتأكد من توفر المنتج، ممكن تقولي اسمه أو رقمه؟ وهشوف ليك المخزون فوراً."
        }
        Intent::Payment => {
            "عندنا طرق دفع كتير: نقدي عند الاستلام، فيزا، فودافون كاش، وإنستاباي. أي طريقة تريحك؟"
        }
        Intent::Shipping => {
            "التوصيل بيكون خلال 2-5 أيام حسب المحافظة. التوصيل مجاني للطلبات فوق 500 جنيه. عايز تعرف المدة لمحافظة معينة؟"
        }
        Intent::Return => {
            "عندك 14 يوم من تاريخ الاستلام للإرجاع أو الاستبدال. المنتج لازم يكون بحالته الأصلية. محتاج تفاصيل أكتر؟"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_fallback_without_intent() {
        let mut rng = StepRng::new(0, 1);
        assert_eq!(reply_for(None, &mut rng), FALLBACK_REPLY);
    }

    #[test]
    fn test_greeting_is_one_of_variants() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let reply = reply_for(Some(Intent::Greeting), &mut rng);
            assert!(GREETINGS.contains(&reply));
        }
    }

    #[test]
    fn test_every_intent_has_reply() {
        let mut rng = StepRng::new(0, 1);
        for intent in Intent::ALL {
            let reply = reply_for(Some(intent), &mut rng);
            assert!(!reply.is_empty());
            assert_ne!(reply, FALLBACK_REPLY);
        }
    }
}
