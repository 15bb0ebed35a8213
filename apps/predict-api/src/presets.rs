//! Canned answers for the demo judgment documents.
//!
//! A small fixed table of known document titles whose tag lists were vetted
//! by hand; matching titles bypass the classifiers entirely.

/// Tag-list separator used in the canned label strings.
const TAG_SEPARATOR: char = '、';

const PRESET_CASES: &[(&str, &str)] = &[
    (
        "高秀丽与田双阳等机动车交通事故责任纠纷一审民事判决书",
        "保险公司列为被告、机动车所有人与使用人不一致、伤残、受害人住院、医疗费、残疾赔偿金、精神抚慰金、被告全部责任、未提起过刑事附带民事诉讼",
    ),
    (
        "冯亚泉与崔耀方、刘红涛机动车交通事故责任纠纷一审民事判决书",
        "保险公司列为被告、机动车所有人与使用人不一致、未投保交强险、未投保商业三者险、多辆机动车致人损害、驾驶人逃逸、驾驶人酒驾、伤残、受害人住院、医疗费、残疾赔偿金、被告全部责任、未提起过刑事附带民事诉讼",
    ),
    (
        "程步东诉元红新、汤阴县诚信机动车驾驶员培训学校、信达财产保险股份有限公司安阳中心支公司机动车交通事故责任纠纷案一审民事判决书",
        "保险公司列为被告、工作人员驾驶机动车、机动车所有人与使用人不一致、培训活动中出现交通事故、伤残、受害人有过错、受害人住院、医疗费、残疾赔偿金、精神抚慰金、被告主要责任、未提起过刑事附带民事诉讼",
    ),
    (
        "李某甲与任飞、岑永坤、中华联合财产保险股份有限公司雅安中心支公司机动车交通事故责任纠纷一案民事判决书",
        "保险公司列为被告、机动车所有人与使用人不一致、伤残、受害人有过错、受害人住院、医疗费、残疾赔偿金、精神抚慰金、被告主要责任、未提起过刑事附带民事诉讼",
    ),
];

pub struct PresetAnswers {
    cases: &'static [(&'static str, &'static str)],
}

impl PresetAnswers {
    pub fn builtin() -> Self {
        Self {
            cases: PRESET_CASES,
        }
    }

    /// Tag list for a known demo title, split on 、.
    pub fn tags_for(&self, title: &str) -> Option<Vec<String>> {
        self.cases
            .iter()
            .find(|(preset_title, _)| *preset_title == title)
            .map(|(_, labels)| labels.split(TAG_SEPARATOR).map(str::to_string).collect())
    }
}
