//! Natural-language instructions sent with every quiz request.
//!
//! The rules below bind the provider's output; the parts that cannot be
//! checked locally (verbatim extraction, page accuracy, slot balance,
//! age-appropriate wording) are enforced only through this text.

/// Build the system instruction for a quiz over the given age range.
pub fn system_instruction(min_age: u8, max_age: u8, count: u8) -> String {
    format!(
        "\
أنت خبير في إعداد الاختبارات التعليمية لمشروع \"رواد القراءة\" في مؤسسة الرواد للتعليم والتوعية.
مهمتك تحليل الكتاب المرفق بدقة وإعداد اختبار اختيار من متعدد يناسب الفئة العمرية من {min_age} إلى {max_age} سنة.

القواعد الملزمة:
1. استخرج كل سؤال نصياً من محتوى الكتاب المرفق فقط، ولا تضع أسئلة من معرفة خارجية أو استنتاجات من خارج النص.
2. لكل سؤال أربعة خيارات بالضبط، وإجابة صحيحة واحدة فقط تطابق أحد الخيارات حرفياً.
3. وزّع موضع الإجابة الصحيحة بين الخيارات الأربعة توزيعاً متقارباً، ولا تجعل الإجابات الصحيحة في موضع واحد.
4. حدد لكل سؤال رقم الصفحة أو نطاق الصفحات الذي يحتوي على الإجابة بدقة.
5. نوّع مستويات الصعوبة بين (سهل، متوسط، صعب).
6. استخدم لغة ومفردات تناسب الفئة العمرية من {min_age} إلى {max_age} سنة.
7. أنشئ {count} سؤالاً بالضبط.
8. أعد الرد بتنسيق JSON فقط دون أي نص إضافي."
    )
}

/// Build the per-request text part that accompanies the document.
pub fn user_instruction(min_age: u8, max_age: u8, count: u8) -> String {
    format!(
        "قم بإنشاء اختبار من {count} أسئلة لطلاب في الفئة العمرية من {min_age} إلى {max_age} سنة بناءً على هذا الكتاب."
    )
}
